//! Bot configuration loading.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;
use typed_builder::TypedBuilder;
use vignette_conversation::UserId;
use vignette_error::{ConfigError, ConfigErrorKind, VignetteError, VignetteResult};

/// Configuration for the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct BotConfig {
    /// Path to the catalog JSON document
    #[serde(default = "default_catalog_path")]
    #[builder(default = default_catalog_path(), setter(into))]
    catalog_path: PathBuf,
    /// The single user allowed to add works
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    admin_id: Option<UserId>,
}

impl BotConfig {
    /// Load bot configuration from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> VignetteResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            VignetteError::from(ConfigError::new(ConfigErrorKind::Read(format!(
                "{}: {}",
                path.display(),
                e
            ))))
        })?;

        toml::from_str(&content).map_err(|e| {
            VignetteError::from(ConfigError::new(ConfigErrorKind::Parse(format!(
                "{}: {}",
                path.display(),
                e
            ))))
        })
    }

    /// Replace the catalog path.
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Replace the admin identity.
    pub fn with_admin_id(mut self, admin_id: Option<UserId>) -> Self {
        self.admin_id = admin_id;
        self
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("fanfics.json")
}

/// Parse an admin identity. Only plain digit strings are accepted.
///
/// Anything else leaves the add-flow disabled rather than failing startup.
pub fn parse_admin_id(raw: &str) -> Option<UserId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        warn!(value = raw, "Ignoring admin id that is not a plain number");
        return None;
    }
    match raw.parse::<i64>() {
        Ok(id) => Some(UserId(id)),
        Err(e) => {
            warn!(value = raw, error = %e, "Ignoring admin id out of range");
            None
        }
    }
}
