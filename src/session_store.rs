//! Session persistence
//!
//! Sessions are keyed by user id. The store itself only guards its own
//! map; per-user ordering comes from the runtime's one-actor-per-user model.

use crate::state_machine::{BotState, Session, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tokio::sync::RwLock;

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS sessions (
    user_id TEXT PRIMARY KEY,
    session TEXT NOT NULL,
    last_active_ms INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_sessions_last_active ON sessions(last_active_ms);
";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Session could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Session store lock poisoned")]
    Poisoned,
}

/// Where sessions live between messages
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, user_id: &UserId) -> Result<Option<Session>, StoreError>;

    async fn save(&self, session: &Session) -> Result<(), StoreError>;

    async fn remove(&self, user_id: &UserId) -> Result<(), StoreError>;

    /// Drop every session last active before `cutoff`, except those in
    /// `keep`, returning the dropped ids
    async fn evict_idle(&self, cutoff: DateTime<Utc>, keep: &HashSet<UserId>) -> Result<Vec<UserId>, StoreError>;
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn load(&self, user_id: &UserId) -> Result<Option<Session>, StoreError> {
        (**self).load(user_id).await
    }

    async fn save(&self, session: &Session) -> Result<(), StoreError> {
        (**self).save(session).await
    }

    async fn remove(&self, user_id: &UserId) -> Result<(), StoreError> {
        (**self).remove(user_id).await
    }

    async fn evict_idle(&self, cutoff: DateTime<Utc>, keep: &HashSet<UserId>) -> Result<Vec<UserId>, StoreError> {
        (**self).evict_idle(cutoff, keep).await
    }
}

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<UserId, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.read().await.get(user_id).cloned())
    }

    async fn save(&self, session: &Session) -> Result<(), StoreError> {
        self.sessions
            .write()
            .await
            .insert(session.user_id.clone(), session.clone());
        Ok(())
    }

    async fn remove(&self, user_id: &UserId) -> Result<(), StoreError> {
        self.sessions.write().await.remove(user_id);
        Ok(())
    }

    async fn evict_idle(&self, cutoff: DateTime<Utc>, keep: &HashSet<UserId>) -> Result<Vec<UserId>, StoreError> {
        let mut sessions = self.sessions.write().await;
        let idle: Vec<UserId> = sessions
            .values()
            .filter(|s| s.last_active < cutoff && !keep.contains(&s.user_id))
            .map(|s| s.user_id.clone())
            .collect();
        for user_id in &idle {
            sessions.remove(user_id);
        }
        Ok(idle)
    }
}

// ============================================================================
// SQLite store
// ============================================================================

/// Sessions stored as JSON rows so conversations survive a restart
pub struct SqliteSessionStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSessionStore {
    /// Use an existing connection, typically the repository's
    pub fn new(conn: Arc<Mutex<Connection>>) -> Result<Self, StoreError> {
        let store = Self { conn };
        store.lock()?.execute_batch(SCHEMA)?;
        Ok(store)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

/// A row that no longer decodes becomes a session in the unknown state,
/// which the router recovers on the next message.
fn decode_session(user_id: &UserId, raw: &str, last_active_ms: i64) -> Session {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(user_id = %user_id, error = %e, "Stored session is unreadable, resetting");
            let last_active = DateTime::from_timestamp_millis(last_active_ms).unwrap_or_else(Utc::now);
            let mut session = Session::new(user_id.clone(), last_active);
            session.state = BotState::Unknown;
            session
        }
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<Session>, StoreError> {
        let row: Option<(String, i64)> = self
            .lock()?
            .query_row(
                "SELECT session, last_active_ms FROM sessions WHERE user_id = ?1",
                params![user_id.as_str()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        Ok(row.map(|(raw, last_active_ms)| decode_session(user_id, &raw, last_active_ms)))
    }

    async fn save(&self, session: &Session) -> Result<(), StoreError> {
        let raw = serde_json::to_string(session)?;
        self.lock()?.execute(
            "INSERT INTO sessions (user_id, session, last_active_ms) VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id) DO UPDATE SET session = excluded.session,
                 last_active_ms = excluded.last_active_ms",
            params![session.user_id.as_str(), raw, session.last_active.timestamp_millis()],
        )?;
        Ok(())
    }

    async fn remove(&self, user_id: &UserId) -> Result<(), StoreError> {
        self.lock()?
            .execute("DELETE FROM sessions WHERE user_id = ?1", params![user_id.as_str()])?;
        Ok(())
    }

    async fn evict_idle(&self, cutoff: DateTime<Utc>, keep: &HashSet<UserId>) -> Result<Vec<UserId>, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let idle = {
            let mut stmt = tx.prepare("SELECT user_id FROM sessions WHERE last_active_ms < ?1")?;
            let rows = stmt.query_map(params![cutoff.timestamp_millis()], |row| row.get::<_, String>(0))?;
            let mut idle = Vec::new();
            for user_id in rows {
                let user_id = UserId::new(user_id?);
                if !keep.contains(&user_id) {
                    idle.push(user_id);
                }
            }
            idle
        };
        {
            let mut delete = tx.prepare("DELETE FROM sessions WHERE user_id = ?1")?;
            for user_id in &idle {
                delete.execute(params![user_id.as_str()])?;
            }
        }
        tx.commit()?;
        Ok(idle)
    }
}
