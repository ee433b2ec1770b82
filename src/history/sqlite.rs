use async_trait::async_trait;
use chrono::Utc;
use log::error;
use rusqlite::{ params, Connection };
use std::error::Error;
use std::path::Path;
use std::str::FromStr;
use tokio::sync::Mutex;

use crate::history::HistoryStore;
use crate::models::chat::{ ChatMessage, Role };

/// SQLite-backed history store. A single connection guarded by one mutex
/// serializes the insert+evict pair, so concurrent webhook deliveries for
/// the same user cannot leave more than `keep` rows behind.
pub struct SqliteHistoryStore {
    conn: Mutex<Connection>,
    keep: usize,
}

impl SqliteHistoryStore {
    pub fn open<P: AsRef<Path>>(path: P, keep: usize) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        Ok(Self { conn: Mutex::new(conn), keep })
    }

    /// Private in-memory database, used by tests.
    pub fn open_in_memory(keep: usize) -> rusqlite::Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn: Mutex::new(conn), keep })
    }

    fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS chats (
                user_id INTEGER NOT NULL,
                role TEXT NOT NULL,
                content TEXT NOT NULL,
                ts INTEGER NOT NULL
            )",
            []
        )?;
        conn.execute("CREATE INDEX IF NOT EXISTS idx_chats_user_ts ON chats(user_id, ts)", [])?;
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for SqliteHistoryStore {
    async fn append(
        &self,
        user_id: i64,
        role: Role,
        content: &str
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO chats (user_id, role, content, ts) VALUES (?1, ?2, ?3, ?4)",
            params![user_id, role.as_str(), content, Utc::now().timestamp()]
        )?;

        // Timestamps have whole-second granularity, so rowid breaks ties by
        // insertion sequence.
        conn.execute(
            "DELETE FROM chats WHERE rowid IN (
                SELECT rowid FROM chats
                WHERE user_id = ?1
                ORDER BY ts DESC, rowid DESC
                LIMIT -1 OFFSET ?2
            )",
            params![user_id, self.keep as i64]
        )?;

        Ok(())
    }

    async fn history(
        &self,
        user_id: i64
    ) -> Result<Vec<ChatMessage>, Box<dyn Error + Send + Sync>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare(
            "SELECT role, content FROM chats WHERE user_id = ?1 ORDER BY ts ASC, rowid ASC"
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut messages = Vec::new();
        for row in rows {
            let (role_str, content) = row?;
            match Role::from_str(&role_str) {
                Ok(role) => messages.push(ChatMessage { role, content }),
                Err(e) => {
                    error!("Skipping history row with unknown role: {}", e);
                }
            }
        }

        Ok(messages)
    }
}
