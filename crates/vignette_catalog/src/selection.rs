//! Random choice of works and excerpts.

use crate::Catalog;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, instrument};
use vignette_error::{CatalogError, CatalogErrorKind, CatalogResult};

/// Performs uniform random selection over a catalog.
///
/// The random source is injectable so tests can use a seeded generator.
pub struct SelectionEngine {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl SelectionEngine {
    /// Create an engine backed by an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an engine backed by the given generator.
    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    /// Pick an excerpt of `title` uniformly at random.
    #[instrument(skip(self, catalog))]
    pub fn random_excerpt<'a>(&self, catalog: &'a Catalog, title: &str) -> CatalogResult<&'a str> {
        let excerpts = catalog.get(title)?;
        let mut rng = self.rng.lock();
        excerpts
            .choose(&mut **rng)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::new(CatalogErrorKind::NoExcerpts(title.to_string())))
    }

    /// Pick a work uniformly at random, returning its index and title.
    #[instrument(skip_all, fields(works = catalog.len()))]
    pub fn random_title<'a>(&self, catalog: &'a Catalog) -> CatalogResult<(usize, &'a str)> {
        if catalog.is_empty() {
            debug!("No works to choose from");
            return Err(CatalogError::new(CatalogErrorKind::Empty));
        }
        let index = self.rng.lock().gen_range(0..catalog.len());
        Ok((index, catalog.title_at(index)?))
    }
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SelectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionEngine").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .insert("A", vec!["a1".to_string(), "a2".to_string(), "a3".to_string()])
            .unwrap();
        catalog.insert("B", vec!["b1".to_string()]).unwrap();
        catalog
    }

    #[test]
    fn test_random_excerpt_is_member() {
        let engine = SelectionEngine::with_rng(StdRng::seed_from_u64(7));
        let catalog = catalog();
        for _ in 0..50 {
            let excerpt = engine.random_excerpt(&catalog, "A").unwrap();
            assert!(catalog.get("A").unwrap().iter().any(|e| e == excerpt));
        }
    }

    #[test]
    fn test_random_excerpt_unknown_title() {
        let engine = SelectionEngine::with_rng(StdRng::seed_from_u64(7));
        let err = engine.random_excerpt(&catalog(), "Missing").unwrap_err();
        assert!(matches!(err.kind, CatalogErrorKind::NotFound(_)));
    }

    #[test]
    fn test_random_title_is_present() {
        let engine = SelectionEngine::with_rng(StdRng::seed_from_u64(11));
        let catalog = catalog();
        for _ in 0..50 {
            let (index, title) = engine.random_title(&catalog).unwrap();
            assert_eq!(catalog.title_at(index).unwrap(), title);
        }
    }

    #[test]
    fn test_random_title_empty_catalog() {
        let engine = SelectionEngine::default();
        let err = engine.random_title(&Catalog::new()).unwrap_err();
        assert_eq!(err.kind, CatalogErrorKind::Empty);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let catalog = catalog();
        let first = SelectionEngine::with_rng(StdRng::seed_from_u64(3));
        let second = SelectionEngine::with_rng(StdRng::seed_from_u64(3));
        for _ in 0..10 {
            assert_eq!(
                first.random_excerpt(&catalog, "A").unwrap(),
                second.random_excerpt(&catalog, "A").unwrap()
            );
        }
    }
}
