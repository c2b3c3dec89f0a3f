//! Error types for the Vignette excerpt bot.
//!
//! Each category carries a kind plus the source location where it was
//! created. [`VignetteError`] wraps any category so callers can use `?`
//! across crate boundaries.

#![warn(missing_docs)]

mod catalog;
mod config;
mod conversation;
mod storage;

pub use catalog::{CatalogError, CatalogErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use conversation::{ConversationError, ConversationErrorKind};
pub use storage::{StorageError, StorageErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum VignetteErrorKind {
    /// Catalog lookup or mutation error
    Catalog(CatalogError),
    /// Persistence error
    Storage(StorageError),
    /// Conversation flow error
    Conversation(ConversationError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for VignetteErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VignetteErrorKind::Catalog(e) => write!(f, "{}", e),
            VignetteErrorKind::Storage(e) => write!(f, "{}", e),
            VignetteErrorKind::Conversation(e) => write!(f, "{}", e),
            VignetteErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Vignette error with kind discrimination.
#[derive(Debug)]
pub struct VignetteError(Box<VignetteErrorKind>);

impl VignetteError {
    /// Create a new error from a kind.
    pub fn new(kind: VignetteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VignetteErrorKind {
        &self.0
    }
}

impl std::fmt::Display for VignetteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vignette Error: {}", self.0)
    }
}

impl std::error::Error for VignetteError {}

// Generic From implementation for any type that converts to VignetteErrorKind
impl<T> From<T> for VignetteError
where
    T: Into<VignetteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Result type for Vignette operations.
pub type VignetteResult<T> = std::result::Result<T, VignetteError>;
