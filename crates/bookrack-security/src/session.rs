//! Connection-bound session state
//!
//! One slot per connection context. A later login overwrites the slot;
//! expired sessions are dropped lazily when the slot is next read.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use bookrack_shared::types::ConnectionId;

#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(username: String, token: String, ttl_secs: i64) -> Self {
        let now = Utc::now();
        Self {
            username,
            token,
            issued_at: now,
            expires_at: now + Duration::seconds(ttl_secs),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Session slots keyed by connection context.
#[derive(Debug, Default)]
pub struct SessionStore {
    slots: RwLock<HashMap<ConnectionId, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a session to the connection's slot, superseding any prior one.
    pub fn set(&self, ctx: ConnectionId, session: Session) {
        self.slots
            .write()
            .expect("session slot table poisoned")
            .insert(ctx, session);
    }

    /// Read the slot, evicting it first if the session has expired.
    pub fn get_valid(&self, ctx: &ConnectionId, now: DateTime<Utc>) -> Option<Session> {
        let mut slots = self.slots.write().expect("session slot table poisoned");
        match slots.get(ctx) {
            Some(s) if s.is_expired(now) => {
                slots.remove(ctx);
                None
            }
            Some(s) => Some(s.clone()),
            None => None,
        }
    }

    /// Drop the slot when the connection context ends.
    pub fn invalidate(&self, ctx: &ConnectionId) {
        self.slots
            .write()
            .expect("session slot table poisoned")
            .remove(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookrack_shared::types::new_connection_id;

    #[test]
    fn test_set_get_invalidate() {
        let store = SessionStore::new();
        let ctx = new_connection_id();
        store.set(ctx, Session::new("alice".into(), "tok".into(), 3600));

        let session = store.get_valid(&ctx, Utc::now()).unwrap();
        assert_eq!(session.username, "alice");

        store.invalidate(&ctx);
        assert!(store.get_valid(&ctx, Utc::now()).is_none());
    }

    #[test]
    fn test_later_login_supersedes() {
        let store = SessionStore::new();
        let ctx = new_connection_id();
        store.set(ctx, Session::new("alice".into(), "tok1".into(), 3600));
        store.set(ctx, Session::new("bob".into(), "tok2".into(), 3600));

        let session = store.get_valid(&ctx, Utc::now()).unwrap();
        assert_eq!(session.username, "bob");
        assert_eq!(session.token, "tok2");
    }

    #[test]
    fn test_expired_slot_is_evicted_lazily() {
        let store = SessionStore::new();
        let ctx = new_connection_id();
        let session = Session::new("alice".into(), "tok".into(), 3600);
        let past_expiry = session.expires_at;
        store.set(ctx, session);

        // Exactly at expiry the session is no longer valid.
        assert!(store.get_valid(&ctx, past_expiry).is_none());
        // And the slot is gone even for an earlier clock.
        assert!(store.get_valid(&ctx, Utc::now()).is_none());
    }

    #[test]
    fn test_same_user_two_connections() {
        let store = SessionStore::new();
        let a = new_connection_id();
        let b = new_connection_id();
        store.set(a, Session::new("alice".into(), "tok-a".into(), 3600));
        store.set(b, Session::new("alice".into(), "tok-b".into(), 3600));

        assert_eq!(store.get_valid(&a, Utc::now()).unwrap().token, "tok-a");
        assert_eq!(store.get_valid(&b, Utc::now()).unwrap().token, "tok-b");
    }
}
