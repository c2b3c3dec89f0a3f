//! Shared, persisted catalog.

use crate::{Catalog, CatalogPersistence};
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, error, info, instrument};
use vignette_error::{CatalogResult, VignetteResult};

/// Process-wide catalog behind a single writer lock.
///
/// Reads share the lock. [`CatalogStore::add`] holds the write lock across
/// the in-memory insert and the save, so concurrent adds are serialized and
/// a reader never observes a work that failed to persist.
pub struct CatalogStore {
    catalog: RwLock<Catalog>,
    persistence: Box<dyn CatalogPersistence>,
}

impl CatalogStore {
    /// Load the catalog from `persistence`.
    #[instrument(skip_all)]
    pub async fn open(persistence: impl CatalogPersistence + 'static) -> VignetteResult<Self> {
        let catalog = persistence.load().await?;
        info!(works = catalog.len(), "Catalog store opened");
        Ok(Self::with_catalog(catalog, persistence))
    }

    /// Wrap an already loaded catalog.
    pub fn with_catalog(catalog: Catalog, persistence: impl CatalogPersistence + 'static) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            persistence: Box::new(persistence),
        }
    }

    /// Shared read access to the current catalog.
    pub async fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().await
    }

    /// Copy of the current catalog.
    pub async fn snapshot(&self) -> Catalog {
        self.catalog.read().await.clone()
    }

    /// Add a work and persist the whole catalog.
    ///
    /// Fails with `DuplicateTitle` if the trimmed title exists. If saving
    /// fails the insert is undone and the storage error is returned.
    /// Returns the index of the new work.
    #[instrument(skip(self, excerpts), fields(excerpts = excerpts.len()))]
    pub async fn add(&self, title: &str, excerpts: Vec<String>) -> VignetteResult<usize> {
        let mut catalog = self.catalog.write().await;
        let index = catalog.insert(title, excerpts)?;

        if let Err(e) = self.persistence.save(&catalog).await {
            error!(error = %e, "Failed to persist catalog, rolling back insert");
            catalog.remove(title.trim());
            return Err(e.into());
        }

        info!(title = %title.trim(), index, "Work added");
        Ok(index)
    }

    /// Excerpts of a work.
    pub async fn get(&self, title: &str) -> CatalogResult<Vec<String>> {
        self.catalog.read().await.get(title).map(<[String]>::to_vec)
    }

    /// Whether a work with this title exists.
    pub async fn contains(&self, title: &str) -> bool {
        self.catalog.read().await.contains(title)
    }

    /// Title at an addressable index.
    pub async fn title_at(&self, index: usize) -> CatalogResult<String> {
        let title = self.catalog.read().await.title_at(index).map(str::to_string);
        if title.is_err() {
            debug!(index, "Stale index");
        }
        title
    }

    /// Addressable index of a title.
    pub async fn index_of(&self, title: &str) -> CatalogResult<usize> {
        self.catalog.read().await.index_of(title)
    }

    /// Number of works.
    pub async fn len(&self) -> usize {
        self.catalog.read().await.len()
    }

    /// Whether the catalog is empty.
    pub async fn is_empty(&self) -> bool {
        self.catalog.read().await.is_empty()
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore").finish_non_exhaustive()
    }
}
