use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Platform Args ---
    /// Bot token for the messaging platform. Required; the process refuses to start without it.
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: String,

    /// Base URL of the messaging platform API.
    #[arg(long, env = "TELEGRAM_API_BASE", default_value = "https://api.telegram.org")]
    pub telegram_api_base: String,

    // --- Completion Service Args ---
    /// API key for the chat completion service. Required; the process refuses to start without it.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// Base URL for the chat completion API.
    #[arg(long, env = "CHAT_BASE_URL", default_value = "https://api.openai.com")]
    pub chat_base_url: String,

    /// Model name for chat completion.
    #[arg(long, env = "CHAT_MODEL", default_value = "gpt-4o-mini")]
    pub chat_model: String,

    /// Timeout in seconds for outbound HTTP calls (completion service and notifier).
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,

    // --- History Store Args ---
    /// Path of the SQLite file backing conversation history.
    #[arg(long, env = "DB_PATH", default_value = "memory.db")]
    pub db_path: String,

    /// Number of messages retained per user; older ones are evicted on append.
    #[arg(long, env = "HISTORY_LIMIT", default_value = "20")]
    pub history_limit: usize,

    // --- Persona Args ---
    /// Optional path to a JSON persona file (name, prompt, fixed replies, blocked terms).
    /// The built-in persona is used when unset.
    #[arg(long, env = "PERSONA_PATH")]
    pub persona_path: Option<String>,

    // --- Server Args ---
    /// Port for the webhook HTTP server to listen on.
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,
}
