pub mod api;

use crate::agent::ChatAgent;
use std::error::Error;
use std::sync::Arc;

pub struct Server {
    port: u16,
    agent: Arc<ChatAgent>,
}

impl Server {
    pub fn new(port: u16, agent: Arc<ChatAgent>) -> Self {
        Self { port, agent }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::start_http_server(self.port, self.agent.clone()).await
    }
}
