//! Admin-gated add-work dialogue driver.

use crate::{
    ConversationInput, ConversationState, Effect, Reply, SessionStore, UserId, transition,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use vignette_catalog::CatalogStore;
use vignette_error::{CatalogErrorKind, ConversationError, ConversationErrorKind, VignetteErrorKind};

/// Runs the add-work dialogue against the shared catalog.
///
/// Lock order is session first, then catalog. The catalog read guard is
/// released before a commit takes the write lock.
#[derive(Debug)]
pub struct AddFlow {
    admin: Option<UserId>,
    catalog: Arc<CatalogStore>,
    sessions: SessionStore,
}

impl AddFlow {
    /// Create a dialogue driver. Without an admin the dialogue is unreachable.
    pub fn new(admin: Option<UserId>, catalog: Arc<CatalogStore>) -> Self {
        Self {
            admin,
            catalog,
            sessions: SessionStore::new(),
        }
    }

    /// Whether `user` is the designated admin.
    pub fn is_admin(&self, user: UserId) -> bool {
        self.admin == Some(user)
    }

    /// Session records.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Current dialogue state of `user`.
    pub async fn state(&self, user: UserId) -> ConversationState {
        self.sessions.state(user).await
    }

    /// Start (or restart) the dialogue.
    ///
    /// Non-admins are refused without a session being created.
    #[instrument(skip(self), fields(%user))]
    pub async fn request(&self, user: UserId) -> Result<Reply, ConversationError> {
        if !self.is_admin(user) {
            warn!("Add request from non-admin refused");
            return Err(ConversationError::new(
                ConversationErrorKind::AuthorizationDenied(user.get()),
            ));
        }

        match self.step(user, ConversationInput::AddRequest, true).await {
            Some(reply) => Ok(reply),
            None => Ok(Reply::AskTitle),
        }
    }

    /// Feed free text to the dialogue.
    ///
    /// Returns `None` when `user` has no dialogue in progress.
    #[instrument(skip(self, text), fields(%user, len = text.len()))]
    pub async fn reply(&self, user: UserId, text: &str) -> Option<Reply> {
        let reply = self
            .step(user, ConversationInput::TextReply(text.to_string()), false)
            .await;
        self.sessions.prune_idle();
        reply
    }

    async fn step(&self, user: UserId, input: ConversationInput, create: bool) -> Option<Reply> {
        let handle = if create {
            self.sessions.get_or_create(user)
        } else {
            self.sessions.get(user)?
        };
        let mut state = handle.lock().await;

        let result = {
            let catalog = self.catalog.read().await;
            transition(&state, input, &catalog)
        };
        debug!(from = %*state, to = %result.new_state, "Dialogue transition");

        match result.effect {
            Effect::Ignore => {
                *state = result.new_state;
                None
            }
            Effect::Reply(reply) => {
                *state = result.new_state;
                Some(reply)
            }
            Effect::Commit { title, excerpts } => {
                let sentences = excerpts.len();
                match self.catalog.add(&title, excerpts).await {
                    Ok(_) => {
                        info!(title = %title, sentences, "Work committed");
                        *state = result.new_state;
                        Some(Reply::Saved { title, sentences })
                    }
                    Err(e) => match e.kind() {
                        VignetteErrorKind::Catalog(c)
                            if matches!(c.kind, CatalogErrorKind::DuplicateTitle(_)) =>
                        {
                            warn!(title = %title, "Title taken before commit");
                            *state = ConversationState::Idle;
                            Some(Reply::TitleTaken { title })
                        }
                        _ => {
                            error!(title = %title, error = %e, "Commit failed");
                            *state = ConversationState::AwaitingText {
                                pending_title: title.clone(),
                            };
                            Some(Reply::SaveFailed { title })
                        }
                    },
                }
            }
        }
    }
}
