mod telegram;

pub use telegram::TelegramNotifier;

use async_trait::async_trait;

/// Best-effort delivery of a reply to a chat. Implementations log failures
/// and return normally; nothing propagates to the caller and nothing is
/// retried.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, chat_id: i64, text: &str);
}
