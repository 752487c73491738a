use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::ChatWidget;

struct Entry {
    widget: ChatWidget,
    expires_at: DateTime<Utc>,
}

/// In-memory widget sessions with an idle expiry. Every access that finds a
/// live session pushes its expiry forward.
pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<Uuid, Entry>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Stores a new widget, dropping any sessions that have gone idle.
    pub fn create(&self, widget: ChatWidget) -> Uuid {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());

        let before = sessions.len();
        sessions.retain(|_, entry| entry.expires_at > now);
        let pruned = before - sessions.len();
        if pruned > 0 {
            tracing::debug!(pruned, "expired widget sessions dropped");
        }

        sessions.insert(
            id,
            Entry {
                widget,
                expires_at: now + self.ttl,
            },
        );
        id
    }

    /// Runs `f` against a live session. Returns `None` for unknown or
    /// expired ids. The lock is held only for the duration of `f`.
    pub fn with<T>(&self, id: Uuid, f: impl FnOnce(&mut ChatWidget) -> T) -> Option<T> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());

        let entry = sessions.get_mut(&id)?;
        if entry.expires_at <= now {
            sessions.remove(&id);
            return None;
        }
        entry.expires_at = now + self.ttl;
        Some(f(&mut entry.widget))
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
