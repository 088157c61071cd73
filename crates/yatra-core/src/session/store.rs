//! Session store trait.

use super::model::{SenderId, Session};
use crate::error::Result;
use async_trait::async_trait;

/// Keyed, concurrency-safe storage of one [`Session`] per sender.
///
/// This trait decouples the dialog engine from the storage mechanism
/// (in-memory map, networked key-value backend, ...).
///
/// # Implementation Notes
///
/// Implementations must serialize concurrent access per sender without a
/// global lock: two transitions for the *same* sender never interleave,
/// while unrelated senders never contend. Idle-session expiry is an
/// optional, store-level policy; an expired session is indistinguishable
/// from an absent one.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the sender's session, creating an initialized one if absent
    /// (or expired).
    async fn get(&self, sender: &SenderId) -> Result<Session>;

    /// Persists the session, replacing any previous value for its sender.
    async fn put(&self, session: Session) -> Result<()>;

    /// Removes the sender's session, if any.
    async fn remove(&self, sender: &SenderId) -> Result<()>;
}
