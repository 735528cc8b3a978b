//! Outbound delivery channel selection

use serde::{Deserialize, Serialize};

/// Which messenger carries verification codes to admins
///
/// Credentials for the selected channel are read by the messenger
/// implementation itself and checked at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessengerChannel {
    /// EmailJS transactional email
    Email,
    /// WhatsApp template message via Twilio
    Whatsapp,
    /// In-memory mock that logs codes (development only)
    Mock,
}

impl MessengerChannel {
    /// Get the channel from `MESSENGER_CHANNEL`, defaulting to mock
    pub fn from_env() -> Self {
        std::env::var("MESSENGER_CHANNEL")
            .unwrap_or_else(|_| String::from("mock"))
            .parse()
            .unwrap_or(MessengerChannel::Mock)
    }
}

impl Default for MessengerChannel {
    fn default() -> Self {
        MessengerChannel::Mock
    }
}

impl std::fmt::Display for MessengerChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessengerChannel::Email => write!(f, "email"),
            MessengerChannel::Whatsapp => write!(f, "whatsapp"),
            MessengerChannel::Mock => write!(f, "mock"),
        }
    }
}

impl std::str::FromStr for MessengerChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" | "emailjs" => Ok(MessengerChannel::Email),
            "whatsapp" | "twilio" => Ok(MessengerChannel::Whatsapp),
            "mock" => Ok(MessengerChannel::Mock),
            _ => Err(format!("Invalid messenger channel: {}", s)),
        }
    }
}
