use crate::agent::ChatAgent;
use crate::models::telegram::{ Ack, Update };
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    extract::State,
    Json,
};
use log::{ info, error };

#[derive(Clone)]
struct AppState {
    agent: Arc<ChatAgent>,
}

pub async fn start_http_server(
    port: u16,
    agent: Arc<ChatAgent>
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = format!("0.0.0.0:{}", port).parse::<SocketAddr>()?;
    info!("Starting webhook server on: http://{}", addr);

    let app_state = AppState { agent };

    let app = Router::new()
        .route("/", get(liveness_handler))
        .route("/webhook", post(webhook_handler))
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Every delivery is acknowledged with a fixed success response, whatever
/// happens internally, so the platform does not retry it.
async fn webhook_handler(State(state): State<AppState>, Json(update): Json<Update>) -> Json<Ack> {
    let Some(message) = update.message else {
        return Json(Ack::ok());
    };
    let Some(from) = message.from else {
        return Json(Ack::ok());
    };

    let text = message.text.unwrap_or_default();
    if let Err(e) = state.agent.handle_message(from.id, message.chat.id, &text).await {
        error!("Failed to process message from user {}: {}", from.id, e);
    }

    Json(Ack::ok())
}

async fn liveness_handler(State(state): State<AppState>) -> String {
    format!("{} is active", state.agent.persona().name)
}
