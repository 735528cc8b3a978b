//! Outbound messenger module - verification code delivery
//!
//! Delivery providers for the verification flow:
//! - EmailJS for transactional email
//! - Twilio for WhatsApp messages built from a content template
//! - A logging mock for development and tests

pub mod emailjs;
pub mod mock;
pub mod twilio;

pub use emailjs::{EmailJsConfig, EmailJsMessenger};
pub use mock::MockMessenger;
pub use twilio::{TwilioConfig, TwilioMessenger};

use async_trait::async_trait;

use lark_core::services::verification::CodeMessenger;
use lark_shared::config::MessengerChannel;

use crate::InfraError;

/// Messenger selected by configuration at startup
///
/// Wrapping the concrete providers in one enum keeps application state
/// generic over a single `CodeMessenger` type while the channel choice
/// stays a runtime decision.
pub enum Messenger {
    EmailJs(EmailJsMessenger),
    Twilio(TwilioMessenger),
    Mock(MockMessenger),
}

impl Messenger {
    /// Build the messenger for the configured channel
    ///
    /// Credentials are read from the environment here, at startup, so a
    /// missing variable fails boot instead of the first delivery.
    pub fn for_channel(channel: &MessengerChannel) -> Result<Self, InfraError> {
        match channel {
            MessengerChannel::Email => Ok(Self::EmailJs(EmailJsMessenger::from_env()?)),
            MessengerChannel::Whatsapp => Ok(Self::Twilio(TwilioMessenger::from_env()?)),
            MessengerChannel::Mock => Ok(Self::Mock(MockMessenger::new())),
        }
    }

    /// Provider name for logs
    pub fn provider_name(&self) -> &'static str {
        match self {
            Self::EmailJs(_) => "emailjs",
            Self::Twilio(_) => "twilio",
            Self::Mock(_) => "mock",
        }
    }
}

#[async_trait]
impl CodeMessenger for Messenger {
    async fn deliver_code(&self, identity: &str, code: &str) -> Result<(), String> {
        match self {
            Self::EmailJs(messenger) => messenger.deliver_code(identity, code).await,
            Self::Twilio(messenger) => messenger.deliver_code(identity, code).await,
            Self::Mock(messenger) => messenger.deliver_code(identity, code).await,
        }
    }
}
