//! User identity.

use serde::{Deserialize, Serialize};

/// Chat user identity as reported by the transport.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Raw numeric id.
    pub fn get(self) -> i64 {
        self.0
    }
}
