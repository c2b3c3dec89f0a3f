//! Dialogue states, inputs and replies.

/// Where a user is in the add-work dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_more::Display)]
pub enum ConversationState {
    /// No dialogue in progress
    #[default]
    #[display("idle")]
    Idle,
    /// Waiting for the title of the new work
    #[display("awaiting title")]
    AwaitingTitle,
    /// Title accepted, waiting for the body text
    #[display("awaiting text for {}", pending_title)]
    AwaitingText {
        /// Trimmed title that will be committed
        pending_title: String,
    },
}

impl ConversationState {
    /// Whether a dialogue is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Input accepted by the dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationInput {
    /// Admin asked to add a work
    AddRequest,
    /// Free text sent by the user
    TextReply(String),
}

/// What the dialogue tells the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Ask for the title of the new work
    AskTitle,
    /// Title is blank, ask again
    EmptyTitle,
    /// Title is already in the catalog, ask again
    TitleExists {
        /// Rejected title
        title: String,
    },
    /// Ask for the body text
    AskText {
        /// Accepted title
        title: String,
    },
    /// Body contained no sentences, ask again
    EmptyText,
    /// Work committed
    Saved {
        /// Title of the new work
        title: String,
        /// Number of excerpts stored
        sentences: usize,
    },
    /// Title was taken between the title and text steps
    TitleTaken {
        /// Title that could not be committed
        title: String,
    },
    /// Persisting the catalog failed; the text may be sent again
    SaveFailed {
        /// Title that could not be committed
        title: String,
    },
}
