//! The message-handling entry point.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use yatra_core::dialog::DialogEngine;
use yatra_core::error::Result;
use yatra_core::session::{SenderId, SessionStore};

/// Front door of the assistant: one inbound message in, one reply out.
///
/// Transitions for the same sender are serialized through a per-sender
/// mutex held across the load-transition-store sequence, so two messages
/// from one conversation never interleave. Unrelated senders only contend
/// on the short lock-table accesses, never on each other's transitions.
pub struct BookingAssistant {
    store: Arc<dyn SessionStore>,
    engine: DialogEngine,
    locks: RwLock<HashMap<SenderId, Arc<Mutex<()>>>>,
}

impl BookingAssistant {
    /// Creates an assistant over a session store and a dialog engine.
    pub fn new(store: Arc<dyn SessionStore>, engine: DialogEngine) -> Self {
        Self {
            store,
            engine,
            locks: RwLock::new(HashMap::new()),
        }
    }

    async fn sender_lock(&self, sender: &SenderId) -> Arc<Mutex<()>> {
        {
            let locks = self.locks.read().await;
            if let Some(lock) = locks.get(sender) {
                return lock.clone();
            }
        }
        let mut locks = self.locks.write().await;
        locks
            .entry(sender.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drops the caller's handle on a sender lock and evicts the map entry
    /// when no other task holds one, so the lock table does not grow with
    /// the number of senders ever seen.
    async fn release_sender_lock(&self, sender: &SenderId, lock: Arc<Mutex<()>>) {
        drop(lock);
        let mut locks = self.locks.write().await;
        // Under the write lock no new clone can be taken, so a strong count
        // of one means the map holds the only reference.
        if locks.get(sender).is_some_and(|l| Arc::strong_count(l) == 1) {
            locks.remove(sender);
        }
    }

    /// Handles one inbound message from a sender and returns the reply.
    ///
    /// # Errors
    ///
    /// Fails only when the session store does; dialog-level failures
    /// (invalid input, upstream search errors) are turned into reply text
    /// by the engine.
    pub async fn handle_message(&self, sender: &SenderId, text: &str) -> Result<String> {
        let lock = self.sender_lock(sender).await;
        let result = async {
            let _guard = lock.lock().await;
            let mut session = self.store.get(sender).await?;
            let step_before = session.step;
            let reply = self.engine.transition(&mut session, text).await;
            tracing::debug!(
                sender = %sender,
                from = %step_before,
                to = %session.step,
                "dialog transition"
            );
            self.store.put(session).await?;
            Ok(reply)
        }
        .await;
        self.release_sender_lock(sender, lock).await;
        result
    }

    /// Drops a sender's session entirely.
    pub async fn forget(&self, sender: &SenderId) -> Result<()> {
        let lock = self.sender_lock(sender).await;
        let result = async {
            let _guard = lock.lock().await;
            self.store.remove(sender).await
        }
        .await;
        self.release_sender_lock(sender, lock).await;
        result
    }
}
