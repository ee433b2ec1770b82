use async_trait::async_trait;
use log::warn;
use reqwest::Client as HttpClient;
use std::error::Error as StdError;
use std::time::Duration;

use super::Notifier;
use crate::models::telegram::SendMessageRequest;

pub struct TelegramNotifier {
    http: HttpClient,
    send_url: String,
}

impl TelegramNotifier {
    pub fn new(
        api_base: &str,
        token: &str,
        timeout: Duration
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Box::new(e) as Box<dyn StdError + Send + Sync>)?;

        Ok(Self {
            http,
            send_url: format!("{}/bot{}/sendMessage", api_base.trim_end_matches('/'), token),
        })
    }

    async fn try_send(&self, chat_id: i64, text: &str) -> Result<(), reqwest::Error> {
        let payload = SendMessageRequest {
            chat_id,
            text: text.to_string(),
        };
        self.http.post(&self.send_url).json(&payload).send().await?.error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, chat_id: i64, text: &str) {
        if let Err(e) = self.try_send(chat_id, text).await {
            warn!("Failed to deliver reply to chat {}: {}", chat_id, e);
        }
    }
}
