//! Durable storage for the catalog.

use crate::Catalog;
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use vignette_error::{StorageError, StorageErrorKind};

/// Load/save contract for catalog storage.
#[async_trait]
pub trait CatalogPersistence: Send + Sync {
    /// Read the persisted catalog. An absent store yields an empty catalog.
    async fn load(&self) -> Result<Catalog, StorageError>;

    /// Replace the persisted catalog with `catalog`.
    async fn save(&self, catalog: &Catalog) -> Result<(), StorageError>;
}

/// Catalog stored as a pretty-printed JSON document on disk.
///
/// Saves write a temporary file next to the target and rename it into place.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    /// Create a persistence handler for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogPersistence for JsonFilePersistence {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Catalog, StorageError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No catalog document found, starting empty");
                return Ok(Catalog::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::Io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                ))));
            }
        };

        let catalog: Catalog = serde_json::from_str(&contents).map_err(|e| {
            StorageError::new(StorageErrorKind::Malformed(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        info!(works = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    #[instrument(skip(self, catalog), fields(path = %self.path.display(), works = catalog.len()))]
    async fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(catalog)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_replacing(&path, json.as_bytes()))
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::Io(format!("Task join error: {}", e)))
            })??;

        debug!("Catalog saved");
        Ok(())
    }
}

fn write_replacing(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    let io_err = |e: std::io::Error| {
        StorageError::new(StorageErrorKind::Io(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )))
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents).map_err(io_err)?;
    // Temp files are created owner-only; keep the target's mode across saves
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(io_err)?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
