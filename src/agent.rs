use log::{ info, warn };
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::Args;
use crate::config::persona::{ load_persona, PersonaConfig };
use crate::filter::ContentFilter;
use crate::history::{ initialize_history_store, HistoryStore };
use crate::llm::{ new_client as new_chat_client, ChatClient, LlmConfig };
use crate::models::chat::{ ChatMessage, Role };
use crate::notify::{ Notifier, TelegramNotifier };

/// Sequences a single inbound message: filter, persist, assemble the
/// persona-augmented prompt, call the completion service, persist the
/// reply, notify the chat.
pub struct ChatAgent {
    chat_client: Arc<dyn ChatClient>,
    history_store: Arc<dyn HistoryStore>,
    notifier: Arc<dyn Notifier>,
    filter: ContentFilter,
    persona: Arc<PersonaConfig>,
}

impl ChatAgent {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let persona = load_persona(args.persona_path.as_deref())?;
        let filter = ContentFilter::new(&persona.blocked_terms);

        let history_store = initialize_history_store(args)?;

        let timeout = Duration::from_secs(args.request_timeout_secs);
        let chat_config = LlmConfig {
            api_key: args.openai_api_key.clone(),
            model: args.chat_model.clone(),
            base_url: args.chat_base_url.clone(),
            timeout,
        };
        let chat_client = new_chat_client(&chat_config)?;
        info!(
            "Chat client configured: Model={}, BaseURL={}",
            args.chat_model,
            args.chat_base_url
        );

        let notifier: Arc<dyn Notifier> = Arc::new(
            TelegramNotifier::new(&args.telegram_api_base, &args.telegram_token, timeout)?
        );

        Ok(Self {
            chat_client,
            history_store,
            notifier,
            filter,
            persona,
        })
    }

    /// Wiring point for tests and alternative backends.
    pub fn from_parts(
        chat_client: Arc<dyn ChatClient>,
        history_store: Arc<dyn HistoryStore>,
        notifier: Arc<dyn Notifier>,
        persona: Arc<PersonaConfig>
    ) -> Self {
        let filter = ContentFilter::new(&persona.blocked_terms);
        Self {
            chat_client,
            history_store,
            notifier,
            filter,
            persona,
        }
    }

    pub fn persona(&self) -> &PersonaConfig {
        &self.persona
    }

    /// Storage errors propagate and fail this request; completion and
    /// delivery errors are absorbed here so the user always receives one of
    /// the fixed replies or a generated one.
    pub async fn handle_message(
        &self,
        user_id: i64,
        chat_id: i64,
        text: &str
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let text = text.trim();
        if text.is_empty() {
            self.notifier.send(chat_id, &self.persona.text_only_notice).await;
            return Ok(());
        }

        if self.filter.is_disallowed(text) {
            // The rejected text itself is never persisted.
            let reply = &self.persona.deflection_reply;
            self.notifier.send(chat_id, reply).await;
            self.history_store.append(user_id, Role::Assistant, reply).await?;
            return Ok(());
        }

        self.history_store.append(user_id, Role::User, text).await?;
        let history = self.history_store.history(user_id).await?;

        // The history read already ends with the message appended above, so
        // it goes to the completion service exactly once.
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::new(Role::System, self.persona.system_prompt.clone()));
        messages.extend(history);

        let reply = match self.chat_client.complete(&messages).await {
            Ok(answer) => answer.trim().to_string(),
            Err(e) => {
                warn!("Completion service error for user {}: {}", user_id, e);
                self.persona.fallback_reply.clone()
            }
        };

        self.history_store.append(user_id, Role::Assistant, &reply).await?;
        self.notifier.send(chat_id, &reply).await;

        Ok(())
    }
}
