//! In-memory SessionStore implementation.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use yatra_core::error::Result;
use yatra_core::session::{SenderId, Session, SessionStore};

/// Session storage backed by a process-local map.
///
/// Suitable for a single-process deployment; sessions do not survive a
/// restart. Idle expiry is applied lazily on read: a session whose last
/// mutation is older than the configured timeout is replaced by a fresh one,
/// so an expired session is indistinguishable from an absent one.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SenderId, Session>>,
    idle_timeout: Option<Duration>,
}

impl InMemorySessionStore {
    /// Creates a store without idle expiry.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout: None,
        }
    }

    /// Creates a store that expires sessions idle for longer than
    /// `idle_minutes`.
    pub fn with_idle_timeout(idle_minutes: i64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout: Some(Duration::minutes(idle_minutes)),
        }
    }

    fn is_expired(&self, session: &Session) -> bool {
        match self.idle_timeout {
            Some(timeout) => Utc::now() - session.updated_at > timeout,
            None => false,
        }
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether any sessions exist.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, sender: &SenderId) -> Result<Session> {
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(sender) {
                if !self.is_expired(session) {
                    return Ok(session.clone());
                }
            }
        }
        // Absent or expired: hand out a fresh session. It is not stored
        // until the caller puts it back after the transition.
        tracing::debug!(sender = %sender, "issuing fresh session");
        Ok(Session::new(sender.clone()))
    }

    async fn put(&self, session: Session) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.sender.clone(), session);
        Ok(())
    }

    async fn remove(&self, sender: &SenderId) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(sender);
        Ok(())
    }
}
