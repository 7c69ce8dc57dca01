//! Full-text relay between collaborating peers
//!
//! An explicit message-passing hub: peers join with an identity, publish
//! complete source texts, and receive every other peer's updates unchanged.
//! No diffing and no conflict resolution, the last full-text write wins. The
//! analysis pipeline never touches this registry; it only ever receives
//! "apply this text" commands from whoever drives it.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// A full-text update from one peer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextUpdate {
    pub sender: String,
    pub text: String,
}

/// Broadcast hub relaying text updates among registered peers.
pub struct CollabHub {
    tx: broadcast::Sender<TextUpdate>,
}

impl CollabHub {
    /// `capacity` bounds how many undelivered updates a slow peer may lag
    /// behind before it starts skipping ahead.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        CollabHub { tx }
    }

    /// Register a peer identity and get its receiving handle.
    pub fn join(&self, id: impl Into<String>) -> Peer {
        let id = id.into();
        debug!(peer = %id, "peer joined");
        Peer {
            id,
            rx: self.tx.subscribe(),
        }
    }

    /// Relay an update to every registered peer. Returns the number of peers
    /// it reached; zero peers is not an error.
    pub fn publish(&self, update: TextUpdate) -> usize {
        debug!(sender = %update.sender, bytes = update.text.len(), "relaying text update");
        self.tx.send(update).unwrap_or(0)
    }
}

/// One registered peer's view of the hub.
pub struct Peer {
    id: String,
    rx: broadcast::Receiver<TextUpdate>,
}

impl Peer {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Receive the next update from another peer. The peer's own updates are
    /// skipped; a lagged receiver drops to the oldest retained update rather
    /// than failing. Returns `None` once the hub is gone.
    pub async fn recv(&mut self) -> Option<TextUpdate> {
        loop {
            match self.rx.recv().await {
                Ok(update) if update.sender == self.id => continue,
                Ok(update) => return Some(update),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(peer = %self.id, skipped, "peer lagged behind");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
