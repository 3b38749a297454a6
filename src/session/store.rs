// src/session/store.rs

use crate::errors::ServerError;
use crate::session::state::SessionState;
use crate::session::token::{generate_token_default, hash_token, looks_like_token, TokenHash};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry {
    state: SessionState,
    last_seen: Instant,
}

/// The token a request runs under, and whether the browser still needs
/// to be told about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    pub token: String,
    pub is_new: bool,
}

/// In-memory sessions keyed by token hash.
pub struct SessionStore {
    sessions: Mutex<HashMap<TokenHash, Entry>>,
    idle_ttl: Duration,
    hook_tick: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration, hook_tick: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl,
            hook_tick,
        }
    }

    /// Reuse the cookie's session when it is live, otherwise open a new one.
    pub fn resolve(&self, raw_token: Option<&str>) -> Result<SessionHandle, ServerError> {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().map_err(|_| ServerError::InternalError)?;

        if let Some(raw) = raw_token.filter(|t| looks_like_token(t)) {
            if let Some(entry) = sessions.get_mut(&hash_token(raw)) {
                if now.duration_since(entry.last_seen) < self.idle_ttl {
                    entry.last_seen = now;
                    return Ok(SessionHandle {
                        token: raw.to_string(),
                        is_new: false,
                    });
                }
            }
        }

        let idle_ttl = self.idle_ttl;
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < idle_ttl);
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::debug!(purged, "expired sessions dropped");
        }

        let token = generate_token_default();
        sessions.insert(
            hash_token(&token),
            Entry {
                state: SessionState::new(self.hook_tick),
                last_seen: now,
            },
        );
        tracing::debug!(live = sessions.len(), "session opened");

        Ok(SessionHandle {
            token,
            is_new: true,
        })
    }

    /// Runs `f` with the session's state while holding the store lock.
    pub fn with_session<F, T>(&self, token: &str, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut SessionState) -> Result<T, ServerError>,
    {
        let mut sessions = self.sessions.lock().map_err(|_| ServerError::InternalError)?;
        let entry = sessions
            .get_mut(&hash_token(token))
            .ok_or_else(|| ServerError::Unauthorized("session expired".into()))?;
        f(&mut entry.state)
    }

    /// Forgets a session the browser never learned about.
    pub fn discard(&self, token: &str) -> Result<bool, ServerError> {
        let mut sessions = self.sessions.lock().map_err(|_| ServerError::InternalError)?;
        Ok(sessions.remove(&hash_token(token)).is_some())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
