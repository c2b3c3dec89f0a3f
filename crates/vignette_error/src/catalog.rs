//! Catalog error types.

/// Kinds of catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CatalogErrorKind {
    /// A work with this title is already in the catalog
    #[display("Title already exists: {}", _0)]
    DuplicateTitle(String),
    /// No work with this title
    #[display("Title not found: {}", _0)]
    NotFound(String),
    /// Index does not address any work in the current catalog
    #[display("Index {} out of range for catalog of {} works", index, len)]
    OutOfRange {
        /// Requested position
        index: usize,
        /// Number of works at lookup time
        len: usize,
    },
    /// Catalog has no works at all
    #[display("Catalog is empty")]
    Empty,
    /// Title is empty after trimming
    #[display("Title must not be empty")]
    EmptyTitle,
    /// Title carries leading or trailing whitespace
    #[display("Title has surrounding whitespace: {:?}", _0)]
    UntrimmedTitle(String),
    /// An excerpt of this work is blank
    #[display("Work has a blank excerpt: {}", _0)]
    BlankExcerpt(String),
    /// Work would have no excerpts
    #[display("Work has no excerpts: {}", _0)]
    NoExcerpts(String),
}

/// Catalog error with location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::DuplicateTitle("Dune".to_string()));
/// assert!(format!("{}", err).contains("already exists"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The kind of error that occurred
    pub kind: CatalogErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new catalog error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
