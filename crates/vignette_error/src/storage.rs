//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// I/O error while reading or writing the catalog document
    #[display("I/O error: {}", _0)]
    Io(String),
    /// Catalog document exists but does not have the expected structure
    #[display("Malformed catalog document: {}", _0)]
    Malformed(String),
    /// Catalog could not be serialized
    #[display("Serialization failed: {}", _0)]
    Serialize(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Io("disk full".to_string()));
/// assert!(format!("{}", err).contains("disk full"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
