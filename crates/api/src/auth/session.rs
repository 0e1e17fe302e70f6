//! Session cache abstraction and its Redis / in-memory implementations.
//!
//! A session is live while its `auth:{jti}` key exists; the TTL matches the
//! token lifetime so abandoned sessions expire on their own. A per-user index
//! set `user_sessions:{user_id}` records the jtis minted for each user so a
//! password reset can revoke all of them at once.
//!
//! The store is injected into [`crate::state::AppState`] behind this trait:
//! production wires up [`RedisSessionStore`], integration tests use
//! [`InMemorySessionStore`] and never need a running Redis.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use folio_core::types::DbId;

/// Key prefix for session entries, keyed by `jti`.
const SESSION_KEY_PREFIX: &str = "auth:";

/// Key prefix for the per-user session index sets.
const USER_INDEX_KEY_PREFIX: &str = "user_sessions:";

fn session_key(jti: &str) -> String {
    format!("{SESSION_KEY_PREFIX}{jti}")
}

fn user_index_key(user_id: DbId) -> String {
    format!("{USER_INDEX_KEY_PREFIX}{user_id}")
}

/// Failure talking to the session backend. Always maps to a 500; a session
/// cache outage must never silently authenticate anyone.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session store backend error: {0}")]
    Backend(String),
}

impl From<redis::RedisError> for SessionStoreError {
    fn from(err: redis::RedisError) -> Self {
        SessionStoreError::Backend(err.to_string())
    }
}

/// Server-side session cache keyed by token `jti`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Record a live session for `user_id` with the given TTL.
    async fn put(&self, jti: &str, user_id: DbId, ttl_seconds: u64)
        -> Result<(), SessionStoreError>;

    /// Look up the user id for a session, `None` if expired or revoked.
    async fn get(&self, jti: &str) -> Result<Option<DbId>, SessionStoreError>;

    /// Revoke a single session. Idempotent.
    async fn remove(&self, jti: &str) -> Result<(), SessionStoreError>;

    /// Revoke every session minted for `user_id`, returning how many were live.
    async fn remove_all_for_user(&self, user_id: DbId) -> Result<u64, SessionStoreError>;
}

// ---------------------------------------------------------------------------
// Redis implementation
// ---------------------------------------------------------------------------

/// Production session store over a Redis connection.
///
/// [`ConnectionManager`] multiplexes and reconnects internally, so the store
/// clones it per operation instead of locking.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: ConnectionManager,
}

impl RedisSessionStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(
        &self,
        jti: &str,
        user_id: DbId,
        ttl_seconds: u64,
    ) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.clone();

        let _: () = conn.set_ex(session_key(jti), user_id, ttl_seconds).await?;

        // Index entry for bulk revocation. The index carries the same TTL as
        // the newest session so it cannot outlive every member forever.
        let index = user_index_key(user_id);
        let _: () = conn.sadd(&index, jti).await?;
        let _: () = conn.expire(&index, ttl_seconds as i64).await?;

        Ok(())
    }

    async fn get(&self, jti: &str) -> Result<Option<DbId>, SessionStoreError> {
        let mut conn = self.conn.clone();
        let user_id: Option<DbId> = conn.get(session_key(jti)).await?;
        Ok(user_id)
    }

    async fn remove(&self, jti: &str) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(session_key(jti)).await?;
        Ok(())
    }

    async fn remove_all_for_user(&self, user_id: DbId) -> Result<u64, SessionStoreError> {
        let mut conn = self.conn.clone();
        let index = user_index_key(user_id);

        let jtis: Vec<String> = conn.smembers(&index).await?;
        let mut removed = 0u64;
        for jti in &jtis {
            let deleted: i64 = conn.del(session_key(jti)).await?;
            removed += deleted as u64;
        }
        let _: () = conn.del(&index).await?;

        Ok(removed)
    }
}

// ---------------------------------------------------------------------------
// In-memory implementation (tests, local development without Redis)
// ---------------------------------------------------------------------------

/// In-memory session store with the same expiry semantics as Redis.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, (DbId, Instant)>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(
        &self,
        jti: &str,
        user_id: DbId,
        ttl_seconds: u64,
    ) -> Result<(), SessionStoreError> {
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds);
        let mut sessions = self.sessions.lock().expect("session map poisoned");
        sessions.insert(jti.to_string(), (user_id, expires_at));
        Ok(())
    }

    async fn get(&self, jti: &str) -> Result<Option<DbId>, SessionStoreError> {
        let mut sessions = self.sessions.lock().expect("session map poisoned");
        match sessions.get(jti) {
            Some((user_id, expires_at)) if *expires_at > Instant::now() => Ok(Some(*user_id)),
            Some(_) => {
                // Expired entry: drop it, as Redis would have.
                sessions.remove(jti);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, jti: &str) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.lock().expect("session map poisoned");
        sessions.remove(jti);
        Ok(())
    }

    async fn remove_all_for_user(&self, user_id: DbId) -> Result<u64, SessionStoreError> {
        let mut sessions = self.sessions.lock().expect("session map poisoned");
        let before = sessions.len();
        sessions.retain(|_, (owner, _)| *owner != user_id);
        Ok((before - sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_remove() {
        let store = InMemorySessionStore::new();
        store.put("jti-1", 42, 60).await.unwrap();

        assert_eq!(store.get("jti-1").await.unwrap(), Some(42));

        store.remove("jti-1").await.unwrap();
        assert_eq!(store.get("jti-1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = InMemorySessionStore::new();
        store.remove("never-existed").await.unwrap();
        assert_eq!(store.get("never-existed").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_session_reads_as_absent() {
        let store = InMemorySessionStore::new();
        store.put("jti-ttl", 7, 0).await.unwrap();

        assert_eq!(store.get("jti-ttl").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_all_only_hits_one_user() {
        let store = InMemorySessionStore::new();
        store.put("a1", 1, 60).await.unwrap();
        store.put("a2", 1, 60).await.unwrap();
        store.put("b1", 2, 60).await.unwrap();

        let removed = store.remove_all_for_user(1).await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.get("a1").await.unwrap(), None);
        assert_eq!(store.get("a2").await.unwrap(), None);
        assert_eq!(store.get("b1").await.unwrap(), Some(2));
    }
}
