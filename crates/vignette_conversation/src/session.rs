//! Per-user dialogue sessions.

use crate::{ConversationState, UserId};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Handle to one user's session. Holding the lock serializes that user's events.
pub type SessionHandle = Arc<tokio::sync::Mutex<ConversationState>>;

/// Sessions keyed by user identity.
///
/// The map lock is only held to look up or insert a handle; transitions run
/// under the per-user lock so different users never wait on each other.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<UserId, SessionHandle>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for `user`, created in `Idle` if absent.
    pub fn get_or_create(&self, user: UserId) -> SessionHandle {
        let mut sessions = self.sessions.lock();
        Arc::clone(sessions.entry(user).or_insert_with(|| {
            debug!(%user, "Creating session");
            SessionHandle::default()
        }))
    }

    /// Session for `user` if one exists.
    pub fn get(&self, user: UserId) -> Option<SessionHandle> {
        self.sessions.lock().get(&user).cloned()
    }

    /// Current state for `user`; `Idle` when no session exists.
    pub async fn state(&self, user: UserId) -> ConversationState {
        match self.get(user) {
            Some(handle) => handle.lock().await.clone(),
            None => ConversationState::Idle,
        }
    }

    /// Whether a session record exists for `user`.
    pub fn contains(&self, user: UserId) -> bool {
        self.sessions.lock().contains_key(&user)
    }

    /// Number of session records.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    /// Whether there are no session records.
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    /// Drop idle sessions nobody else is holding.
    ///
    /// Returns the number of sessions removed.
    pub fn prune_idle(&self) -> usize {
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, handle| {
            if Arc::strong_count(handle) > 1 {
                return true;
            }
            match handle.try_lock() {
                Ok(state) => state.is_active(),
                Err(_) => true,
            }
        });
        let removed = before - sessions.len();
        if removed > 0 {
            debug!(removed, "Pruned idle sessions");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_without_session_is_idle() {
        let store = SessionStore::new();
        assert_eq!(store.state(UserId(1)).await, ConversationState::Idle);
        assert!(!store.contains(UserId(1)));
    }

    #[tokio::test]
    async fn test_get_or_create_returns_same_session() {
        let store = SessionStore::new();
        let first = store.get_or_create(UserId(1));
        *first.lock().await = ConversationState::AwaitingTitle;

        let second = store.get_or_create(UserId(1));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.state(UserId(1)).await, ConversationState::AwaitingTitle);
    }

    #[tokio::test]
    async fn test_prune_keeps_active_and_held_sessions() {
        let store = SessionStore::new();
        *store.get_or_create(UserId(1)).lock().await = ConversationState::AwaitingTitle;
        store.get_or_create(UserId(2));
        let held = store.get_or_create(UserId(3));

        assert_eq!(store.prune_idle(), 1);
        assert!(store.contains(UserId(1)));
        assert!(!store.contains(UserId(2)));
        assert!(store.contains(UserId(3)));

        drop(held);
        assert_eq!(store.prune_idle(), 1);
        assert_eq!(store.len(), 1);
    }
}
