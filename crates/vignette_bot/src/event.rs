//! Transport-independent interaction events.

use crate::ActionRef;
use vignette_conversation::UserId;

/// A user action delivered by the chat transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEvent {
    /// `/start`
    Start(UserId),
    /// Work button tapped
    PickTitle(UserId, usize),
    /// "Another quote" tapped
    Reroll(UserId, usize),
    /// "Random" tapped
    Random(UserId),
    /// "Pick another work" tapped
    Back(UserId),
    /// `/addfanfic` or the add button
    AddRequest(UserId),
    /// Any other text message
    TextReply(UserId, String),
}

impl InteractionEvent {
    /// Event for a tapped button.
    pub fn from_action(user: UserId, action: ActionRef) -> Self {
        match action {
            ActionRef::PickWork(i) => Self::PickTitle(user, i),
            ActionRef::Reroll(i) => Self::Reroll(user, i),
            ActionRef::Random => Self::Random(user),
            ActionRef::Back => Self::Back(user),
            ActionRef::AddWork => Self::AddRequest(user),
        }
    }

    /// User who triggered the event.
    pub fn user(&self) -> UserId {
        match self {
            Self::Start(u)
            | Self::PickTitle(u, _)
            | Self::Reroll(u, _)
            | Self::Random(u)
            | Self::Back(u)
            | Self::AddRequest(u)
            | Self::TextReply(u, _) => *u,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start(_) => "start",
            Self::PickTitle(..) => "pick_title",
            Self::Reroll(..) => "reroll",
            Self::Random(_) => "random",
            Self::Back(_) => "back",
            Self::AddRequest(_) => "add_request",
            Self::TextReply(..) => "text_reply",
        }
    }
}
