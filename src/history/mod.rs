mod sqlite;

pub use sqlite::SqliteHistoryStore;

use async_trait::async_trait;
use log::info;
use std::error::Error;
use std::sync::Arc;
use crate::cli::Args;
use crate::models::chat::{ ChatMessage, Role };

/// Durable per-user conversation log. Append inserts one record and then
/// evicts everything older than the retention window for that user, as a
/// single serialized step. History is returned oldest first.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append(
        &self,
        user_id: i64,
        role: Role,
        content: &str
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    async fn history(
        &self,
        user_id: i64
    ) -> Result<Vec<ChatMessage>, Box<dyn Error + Send + Sync>>;
}

pub fn initialize_history_store(
    args: &Args
) -> Result<Arc<dyn HistoryStore>, Box<dyn Error + Send + Sync>> {
    info!(
        "Chat history will be stored in: {} (keeping last {} messages per user)",
        args.db_path,
        args.history_limit
    );
    let store = SqliteHistoryStore::open(&args.db_path, args.history_limit)?;
    Ok(Arc::new(store))
}
