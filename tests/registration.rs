//! Registration Integration Tests
//!
//! The phone setup flow against the local gateway.

use blume::adapters::LocalGateway;
use blume::core::{PhoneRegistration, RegistrationOutcome, DEFAULT_AGENT_NAME};
use blume::phone::{Country, NormalizePolicy, PhoneError};

#[tokio::test]
async fn test_valid_number_reaches_gateway() {
    let flow = PhoneRegistration::new(LocalGateway::new());

    let outcome = flow
        .submit("(555) 123-4567", Country::Us, Some("Calendar Copilot"))
        .await
        .unwrap();

    match outcome {
        RegistrationOutcome::Submitted {
            phone,
            agent_name,
            response,
        } => {
            assert_eq!(phone.as_str(), "+15551234567");
            assert_eq!(agent_name, "Calendar Copilot");
            assert!(response.success);
            assert_eq!(
                response.message.as_deref(),
                Some("Confirmation message sent to +15551234567")
            );
        }
        other => panic!("Expected Submitted, got {:?}", other),
    }

    let registered = flow.gateway().registered().await;
    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].phone.as_str(), "+15551234567");
}

#[tokio::test]
async fn test_invalid_number_never_reaches_gateway() {
    let flow = PhoneRegistration::new(LocalGateway::new());

    let outcome = flow.submit("12345", Country::Gb, None).await.unwrap();
    assert!(matches!(
        outcome,
        RegistrationOutcome::Invalid(PhoneError::InvalidLength { .. })
    ));
    assert!(flow.gateway().registered().await.is_empty());
}

#[tokio::test]
async fn test_blank_agent_name_uses_fallback() {
    let flow = PhoneRegistration::new(LocalGateway::new());
    let outcome = flow.submit("07123456789", Country::Gb, Some("  ")).await.unwrap();

    match outcome {
        RegistrationOutcome::Submitted { agent_name, .. } => {
            assert_eq!(agent_name, DEFAULT_AGENT_NAME)
        }
        other => panic!("Expected Submitted, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lenient_policy_is_country_agnostic() {
    let flow = PhoneRegistration::new(LocalGateway::new())
        .with_policy(NormalizePolicy::Lenient)
        .with_fallback_agent_name("Blume");

    let outcome = flow.submit("07123456789", Country::Gb, None).await.unwrap();
    match outcome {
        RegistrationOutcome::Submitted {
            phone, agent_name, ..
        } => {
            assert_eq!(phone.as_str(), "+17123456789");
            assert_eq!(agent_name, "Blume");
        }
        other => panic!("Expected Submitted, got {:?}", other),
    }
}
