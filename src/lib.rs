pub mod agent;
pub mod cli;
pub mod config;
pub mod filter;
pub mod history;
pub mod llm;
pub mod models;
pub mod notify;
pub mod server;

use agent::ChatAgent;
use cli::Args;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Listen Port: {}", args.port);
    info!("History DB Path: {}", args.db_path);
    info!("History Limit: {}", args.history_limit);
    info!("Chat Model: {}", args.chat_model);
    info!("Chat Base URL: {}", args.chat_base_url);
    info!("Persona Path: {}", args.persona_path.as_deref().unwrap_or("<built-in>"));
    info!("Request Timeout: {}s", args.request_timeout_secs);
    info!("-------------------------");

    let agent = Arc::new(ChatAgent::new(&args)?);
    let server = Server::new(args.port, agent);
    server.run().await?;

    Ok(())
}
