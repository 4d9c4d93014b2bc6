//! Session store — process-wide keyed state, one [`Session`] per user.
//!
//! Sessions for different users execute independently; a single session's
//! mutation is serialized through its own `Mutex`, which the dispatcher
//! holds for the full duration of a turn. A session is destroyed on
//! explicit reset or TTL expiry — destruction removes the map entry, so
//! holders observe the destruction by re-fetching and receiving a fresh
//! session.

use chrono::{Duration, Utc};
use skillsphere_core::{Session, SessionId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

/// In-memory keyed store of live sessions.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the session for a user, creating it on first contact.
    pub async fn get_or_create(&self, id: &str) -> Arc<Mutex<Session>> {
        // Fast path: the session already exists.
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(id) {
                return session.clone();
            }
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(id.to_string())
            .or_insert_with(|| {
                debug!(session_id = id, "Creating session");
                Arc::new(Mutex::new(Session::new(SessionId::from(id))))
            })
            .clone()
    }

    /// Fetch an existing session without creating one.
    pub async fn get(&self, id: &str) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Explicitly destroy a session. Returns whether it existed.
    pub async fn reset(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            info!(session_id = id, "Session reset");
        }
        removed
    }

    /// Destroy sessions idle longer than `ttl`. Returns how many were
    /// evicted. Sessions currently locked by a running turn are active by
    /// definition and are skipped.
    pub async fn evict_expired(&self, ttl: Duration) -> usize {
        let cutoff = Utc::now() - ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|id, entry| match entry.try_lock() {
            Ok(session) => {
                let keep = session.last_active >= cutoff;
                if !keep {
                    debug!(session_id = id, "Evicting expired session");
                }
                keep
            }
            Err(_) => true,
        });

        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, "Expired sessions evicted");
        }
        evicted
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
