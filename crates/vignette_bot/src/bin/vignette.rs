//! Vignette - serve fiction excerpts from a local catalog.
//!
//! Runs the bot against a console transport: each stdin line is one user
//! action, responses are printed to stdout.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vignette_bot::{BotConfig, Router, parse_admin_id, run_console};
use vignette_catalog::{CatalogStore, JsonFilePersistence};
use vignette_conversation::UserId;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "vignette")]
#[command(about = "Vignette - random quotes from a catalog of stories")]
#[command(version)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog JSON document (overrides the config file)
    #[arg(long, env = "FANFICS_PATH")]
    catalog: Option<PathBuf>,

    /// Admin user id (overrides the config file)
    #[arg(long, env = "ADMIN_ID")]
    admin_id: Option<String>,

    /// User id the console acts as (defaults to the admin, else 0)
    #[arg(long)]
    user_id: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Starting Vignette");

    let mut config = match &args.config {
        Some(path) => {
            info!(config_file = ?path, "Loading configuration");
            BotConfig::from_file(path)?
        }
        None => BotConfig::default(),
    };
    if let Some(catalog) = args.catalog {
        config = config.with_catalog_path(catalog);
    }
    if let Some(raw) = args.admin_id.as_deref() {
        config = config.with_admin_id(parse_admin_id(raw));
    }
    if config.admin_id().is_none() {
        warn!("No admin configured - adding stories is disabled");
    }

    let store = CatalogStore::open(JsonFilePersistence::new(config.catalog_path())).await?;
    info!(
        catalog = ?config.catalog_path(),
        works = store.len().await,
        "Catalog ready"
    );

    let admin = *config.admin_id();
    let user = args
        .user_id
        .map(UserId)
        .or(admin)
        .unwrap_or(UserId(0));
    let router = Router::new(Arc::new(store), admin);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_console(&router, user, stdin, tokio::io::stdout()).await?;
    Ok(())
}
