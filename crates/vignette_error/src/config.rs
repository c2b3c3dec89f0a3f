//! Configuration error types.

/// Kinds of configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Config file could not be read
    #[display("Failed to read config file: {}", _0)]
    Read(String),
    /// Config file is not valid TOML for the bot settings
    #[display("Failed to parse config: {}", _0)]
    Parse(String),
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Parse("expected `=`".to_string()));
/// assert!(format!("{}", err).contains("Failed to parse config"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
