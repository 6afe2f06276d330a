//! Phone setup flow: validate what the user typed, then hand the canonical
//! number to the agent gateway.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::adapters::{AgentGateway, RegisterPhoneRequest, RegisterPhoneResponse};
use crate::phone::{CanonicalPhoneNumber, Country, NormalizePolicy, PhoneError};

/// Agent name used when the user leaves the field blank
pub const DEFAULT_AGENT_NAME: &str = "Unnamed agent";

/// Outcome of a submit
#[derive(Debug)]
pub enum RegistrationOutcome {
    /// The input was rejected before anything was sent
    Invalid(PhoneError),

    /// The gateway accepted (or refused) the request
    Submitted {
        phone: CanonicalPhoneNumber,
        agent_name: String,
        response: RegisterPhoneResponse,
    },
}

/// Runs phone registrations against a gateway
pub struct PhoneRegistration<G: AgentGateway> {
    gateway: G,
    policy: NormalizePolicy,
    fallback_agent_name: String,
}

impl<G: AgentGateway> PhoneRegistration<G> {
    /// Create a registration flow using the strict policy
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            policy: NormalizePolicy::Strict,
            fallback_agent_name: DEFAULT_AGENT_NAME.to_string(),
        }
    }

    pub fn with_policy(mut self, policy: NormalizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Name used when the agent name field is blank
    pub fn with_fallback_agent_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_agent_name = name.into();
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Resolve the agent name field, falling back when blank
    pub fn agent_name(&self, agent_name: Option<&str>) -> String {
        match agent_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.fallback_agent_name.clone(),
        }
    }

    /// Validate and submit.
    ///
    /// Validation failures are returned as [`RegistrationOutcome::Invalid`]
    /// and nothing reaches the gateway. `Err` is reserved for gateway
    /// failures.
    pub async fn submit(
        &self,
        raw_phone: &str,
        country: Country,
        agent_name: Option<&str>,
    ) -> Result<RegistrationOutcome> {
        let phone = match self.policy.apply(raw_phone, country) {
            Ok(phone) => phone,
            Err(err) => {
                debug!(%country, policy = ?self.policy, "Rejected phone input: {}", err);
                return Ok(RegistrationOutcome::Invalid(err));
            }
        };

        let agent_name = self.agent_name(agent_name);
        info!(
            gateway = self.gateway.name(),
            %phone,
            agent = %agent_name,
            "Submitting phone registration"
        );

        let response = self
            .gateway
            .register_phone(RegisterPhoneRequest {
                agent_name: agent_name.clone(),
                phone: phone.clone(),
            })
            .await?;

        if !response.success {
            warn!(
                %phone,
                error = response.error.as_deref().unwrap_or_default(),
                "Gateway refused phone registration"
            );
        }

        Ok(RegistrationOutcome::Submitted {
            phone,
            agent_name,
            response,
        })
    }
}
