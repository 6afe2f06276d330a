//! In-process gateway used until the backend endpoint exists.
//!
//! Logs each registration, keeps it in memory and answers as the backend
//! would on success.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use super::{AgentGateway, RegisterPhoneRequest, RegisterPhoneResponse};

/// Gateway that records registrations instead of sending them anywhere
#[derive(Debug, Default)]
pub struct LocalGateway {
    registered: Mutex<Vec<RegisterPhoneRequest>>,
}

impl LocalGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrations received so far, oldest first
    pub async fn registered(&self) -> Vec<RegisterPhoneRequest> {
        self.registered.lock().await.clone()
    }
}

#[async_trait]
impl AgentGateway for LocalGateway {
    fn name(&self) -> &str {
        "local"
    }

    async fn register_phone(&self, request: RegisterPhoneRequest) -> Result<RegisterPhoneResponse> {
        info!(
            agent = %request.agent_name,
            phone = %request.phone,
            "Registering phone number"
        );

        let message = format!("Confirmation message sent to {}", request.phone);
        self.registered.lock().await.push(request);

        Ok(RegisterPhoneResponse::ok(message))
    }
}
