//! Conversation error types.

/// Kinds of conversation errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConversationErrorKind {
    /// Requester is not the designated admin
    #[display("User {} is not authorized to add works", _0)]
    AuthorizationDenied(i64),
}

/// Conversation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Conversation Error: {} at line {} in {}", kind, line, file)]
pub struct ConversationError {
    /// The kind of error that occurred
    pub kind: ConversationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConversationError {
    /// Create a new conversation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConversationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
