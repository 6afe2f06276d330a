//! Adapter interfaces for the agent backend.
//!
//! The backend owns persistence and messaging. Adapters give the rest of the
//! crate a single seam to hand it a confirmed phone number.

pub mod local;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::phone::CanonicalPhoneNumber;

pub use local::LocalGateway;

/// Payload for connecting an agent to a phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPhoneRequest {
    pub agent_name: String,

    /// Canonical `+<digits>` number
    pub phone: CanonicalPhoneNumber,
}

/// Backend reply to a registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPhoneResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RegisterPhoneResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Trait for the service that stores the agent's phone number and sends the
/// one-time confirmation message
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Human-readable gateway name
    fn name(&self) -> &str;

    /// Register a number and trigger the confirmation message
    async fn register_phone(&self, request: RegisterPhoneRequest) -> Result<RegisterPhoneResponse>;
}
