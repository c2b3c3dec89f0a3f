//! Insertion-ordered catalog of works.
//!
//! The position of a work in the catalog is its addressable index. Indices are
//! only meaningful for the catalog state they were read from: adding a work
//! never moves existing works, but a reference rendered before a reload may
//! point somewhere else afterwards.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;
use vignette_error::{CatalogError, CatalogErrorKind, CatalogResult};

/// A named work and its excerpts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Work {
    /// Unique, trimmed, non-empty title
    title: String,
    /// Ordered, non-empty list of excerpts
    excerpts: Vec<String>,
}

/// All works known to the bot, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    works: Vec<Work>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of works.
    pub fn len(&self) -> usize {
        self.works.len()
    }

    /// Whether the catalog has no works.
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    /// Whether a work with exactly this title exists.
    pub fn contains(&self, title: &str) -> bool {
        self.works.iter().any(|w| w.title == title)
    }

    /// Titles in insertion order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.works.iter().map(|w| w.title.as_str())
    }

    /// Excerpts of the work with this title.
    pub fn get(&self, title: &str) -> CatalogResult<&[String]> {
        self.works
            .iter()
            .find(|w| w.title == title)
            .map(|w| w.excerpts.as_slice())
            .ok_or_else(|| CatalogError::new(CatalogErrorKind::NotFound(title.to_string())))
    }

    /// Title at an addressable index.
    pub fn title_at(&self, index: usize) -> CatalogResult<&str> {
        self.works
            .get(index)
            .map(|w| w.title.as_str())
            .ok_or_else(|| {
                CatalogError::new(CatalogErrorKind::OutOfRange {
                    index,
                    len: self.works.len(),
                })
            })
    }

    /// Addressable index of a title.
    pub fn index_of(&self, title: &str) -> CatalogResult<usize> {
        self.works
            .iter()
            .position(|w| w.title == title)
            .ok_or_else(|| CatalogError::new(CatalogErrorKind::NotFound(title.to_string())))
    }

    /// Append a new work.
    ///
    /// The title and each excerpt are trimmed; blank excerpts are dropped.
    /// Returns the index of the new work.
    pub fn insert(
        &mut self,
        title: &str,
        excerpts: impl IntoIterator<Item = String>,
    ) -> CatalogResult<usize> {
        let title = title.trim();
        let excerpts: Vec<String> = excerpts
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        self.push_work(title.to_string(), excerpts)
    }

    /// Remove a work by title, returning it.
    ///
    /// Only used to undo an insert whose persistence failed.
    pub(crate) fn remove(&mut self, title: &str) -> Option<Work> {
        let index = self.works.iter().position(|w| w.title == title)?;
        Some(self.works.remove(index))
    }

    fn push_work(&mut self, title: String, excerpts: Vec<String>) -> CatalogResult<usize> {
        if title.trim().is_empty() {
            return Err(CatalogError::new(CatalogErrorKind::EmptyTitle));
        }
        if title.trim() != title {
            return Err(CatalogError::new(CatalogErrorKind::UntrimmedTitle(title)));
        }
        if self.contains(&title) {
            return Err(CatalogError::new(CatalogErrorKind::DuplicateTitle(title)));
        }
        if excerpts.is_empty() {
            return Err(CatalogError::new(CatalogErrorKind::NoExcerpts(title)));
        }
        if excerpts.iter().any(|e| e.trim().is_empty()) {
            return Err(CatalogError::new(CatalogErrorKind::BlankExcerpt(title)));
        }

        debug!(title = %title, excerpts = excerpts.len(), "Appending work");
        self.works.push(Work { title, excerpts });
        Ok(self.works.len() - 1)
    }
}

// Persisted as a JSON object of title -> [excerpt, ...], keeping key order.
impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.works.len()))?;
        for work in &self.works {
            map.serialize_entry(&work.title, &work.excerpts)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a map of titles to lists of excerpts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
        let mut catalog = Catalog::new();
        while let Some((title, excerpts)) = access.next_entry::<String, Vec<String>>()? {
            catalog
                .push_work(title, excerpts)
                .map_err(|e| de::Error::custom(e.kind))?;
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .insert("First", vec!["One.".to_string()])
            .unwrap();
        catalog
            .insert("Second", vec!["Two.".to_string(), "Three.".to_string()])
            .unwrap();
        catalog
    }

    #[test]
    fn test_index_round_trip() {
        let catalog = sample();
        for title in catalog.titles() {
            let index = catalog.index_of(title).unwrap();
            assert_eq!(catalog.title_at(index).unwrap(), title);
        }
    }

    #[test]
    fn test_title_at_out_of_range() {
        let catalog = sample();
        let err = catalog.title_at(2).unwrap_err();
        assert_eq!(err.kind, CatalogErrorKind::OutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn test_insert_trims_and_filters() {
        let mut catalog = Catalog::new();
        let index = catalog
            .insert(
                "  Padded  ",
                vec!["  a.  ".to_string(), "   ".to_string(), "b.".to_string()],
            )
            .unwrap();
        assert_eq!(index, 0);
        assert_eq!(catalog.get("Padded").unwrap(), &["a.", "b."]);
    }

    #[test]
    fn test_insert_duplicate_is_rejected() {
        let mut catalog = sample();
        let before = catalog.clone();
        let err = catalog
            .insert(" First ", vec!["Other.".to_string()])
            .unwrap_err();
        assert!(matches!(err.kind, CatalogErrorKind::DuplicateTitle(_)));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_insert_requires_excerpts() {
        let mut catalog = Catalog::new();
        let err = catalog.insert("Empty", vec![" ".to_string()]).unwrap_err();
        assert!(matches!(err.kind, CatalogErrorKind::NoExcerpts(_)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let mut catalog = sample();
        assert!(catalog.insert("first", vec!["x".to_string()]).is_ok());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_json_keeps_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.insert("Zeta", vec!["z".to_string()]).unwrap();
        catalog.insert("Alpha", vec!["a".to_string()]).unwrap();

        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"{"Zeta":["z"],"Alpha":["a"]}"#);

        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.titles().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_json_rejects_empty_excerpt_list() {
        let result: Result<Catalog, _> = serde_json::from_str(r#"{"Hollow":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_rejects_blank_excerpts() {
        let err = serde_json::from_str::<Catalog>(r#"{"Padded":["", "   "]}"#).unwrap_err();
        assert!(err.to_string().contains("blank excerpt"), "{err}");

        let err = serde_json::from_str::<Catalog>(r#"{"Mixed":["ok.", " "]}"#).unwrap_err();
        assert!(err.to_string().contains("blank excerpt"), "{err}");
    }

    #[test]
    fn test_json_rejects_untrimmed_title() {
        let err = serde_json::from_str::<Catalog>(r#"{"  Padded  ":["x."]}"#).unwrap_err();
        assert!(err.to_string().contains("surrounding whitespace"), "{err}");
    }

    #[test]
    fn test_json_rejects_duplicate_keys() {
        let result: Result<Catalog, _> = serde_json::from_str(r#"{"A":["x"],"A":["y"]}"#);
        assert!(result.is_err());
    }
}
