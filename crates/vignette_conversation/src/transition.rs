//! Pure state transition function for the add-work dialogue.

use crate::{ConversationInput, ConversationState, Reply};
use vignette_catalog::{Catalog, split_sentences};

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a reply
    Reply(Reply),
    /// Add the work to the catalog, then confirm
    Commit {
        /// Trimmed title
        title: String,
        /// Segmented excerpts, never empty
        excerpts: Vec<String>,
    },
    /// Input does not apply to this state
    Ignore,
}

/// Result of a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// State after the input
    pub new_state: ConversationState,
    /// Effect to execute
    pub effect: Effect,
}

impl TransitionResult {
    fn reply(state: ConversationState, reply: Reply) -> Self {
        Self {
            new_state: state,
            effect: Effect::Reply(reply),
        }
    }
}

/// Compute the next dialogue state.
///
/// Given the same inputs this always produces the same outputs. Authorization
/// is checked by the caller before a non-admin input gets here. `catalog` is
/// only read to reject titles that already exist.
pub fn transition(
    state: &ConversationState,
    input: ConversationInput,
    catalog: &Catalog,
) -> TransitionResult {
    match (state, input) {
        // Restarting from any state
        (_, ConversationInput::AddRequest) => {
            TransitionResult::reply(ConversationState::AwaitingTitle, Reply::AskTitle)
        }

        (ConversationState::Idle, ConversationInput::TextReply(_)) => TransitionResult {
            new_state: ConversationState::Idle,
            effect: Effect::Ignore,
        },

        (ConversationState::AwaitingTitle, ConversationInput::TextReply(text)) => {
            let title = text.trim();
            if title.is_empty() {
                TransitionResult::reply(ConversationState::AwaitingTitle, Reply::EmptyTitle)
            } else if catalog.contains(title) {
                TransitionResult::reply(
                    ConversationState::AwaitingTitle,
                    Reply::TitleExists {
                        title: title.to_string(),
                    },
                )
            } else {
                TransitionResult::reply(
                    ConversationState::AwaitingText {
                        pending_title: title.to_string(),
                    },
                    Reply::AskText {
                        title: title.to_string(),
                    },
                )
            }
        }

        (ConversationState::AwaitingText { pending_title }, ConversationInput::TextReply(text)) => {
            let excerpts = split_sentences(&text);
            if excerpts.is_empty() {
                TransitionResult::reply(state.clone(), Reply::EmptyText)
            } else {
                TransitionResult {
                    new_state: ConversationState::Idle,
                    effect: Effect::Commit {
                        title: pending_title.clone(),
                        excerpts,
                    },
                }
            }
        }
    }
}
