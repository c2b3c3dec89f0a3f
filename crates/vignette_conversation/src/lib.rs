//! Per-user "add new work" dialogue.
//!
//! The dialogue moves `Idle -> AwaitingTitle -> AwaitingText -> Idle`.
//! [`transition`] is a pure function over the current state; [`AddFlow`]
//! applies it under a per-user lock and performs the catalog commit.

#![warn(missing_docs)]

mod flow;
mod session;
mod state;
mod transition;
mod user;

pub use flow::AddFlow;
pub use session::{SessionHandle, SessionStore};
pub use state::{ConversationInput, ConversationState, Reply};
pub use transition::{Effect, TransitionResult, transition};
pub use user::UserId;
