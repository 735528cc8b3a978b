//! Twilio WhatsApp delivery
//!
//! Sends verification codes as WhatsApp messages through the Twilio
//! Messages API, using a pre-approved content template with the code as
//! its single variable.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

use lark_core::services::verification::CodeMessenger;
use lark_shared::utils::validation::mask_identity;

use crate::InfraError;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Twilio WhatsApp configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Sending WhatsApp number in E.164 format, without the whatsapp: prefix
    pub from_number: String,
    /// SID of the approved content template carrying the code variable
    pub content_sid: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfraError> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| InfraError::Config("TWILIO_ACCOUNT_SID is not set".to_string()))?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| InfraError::Config("TWILIO_AUTH_TOKEN is not set".to_string()))?;
        let from_number = std::env::var("TWILIO_FROM_NUMBER")
            .map_err(|_| InfraError::Config("TWILIO_FROM_NUMBER is not set".to_string()))?;
        let content_sid = std::env::var("TWILIO_CONTENT_SID")
            .map_err(|_| InfraError::Config("TWILIO_CONTENT_SID is not set".to_string()))?;

        if !from_number.starts_with('+') {
            return Err(InfraError::Config(
                "TWILIO_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid,
            auth_token,
            from_number,
            content_sid,
            request_timeout_secs: std::env::var("TWILIO_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

/// Twilio WhatsApp messenger implementation
pub struct TwilioMessenger {
    client: Client,
    config: TwilioConfig,
}

impl TwilioMessenger {
    /// Create a new Twilio messenger
    pub fn new(config: TwilioConfig) -> Result<Self, InfraError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfraError::Http)?;

        info!(
            from = %mask_identity(&config.from_number),
            "Twilio WhatsApp messenger initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfraError> {
        Self::new(TwilioConfig::from_env()?)
    }

    async fn send_content_message(&self, to: &str, code: &str) -> Result<(), InfraError> {
        let url = format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.config.account_sid
        );

        let variables = serde_json::json!({ "1": code }).to_string();
        let params = [
            ("To", format!("whatsapp:{}", to)),
            ("From", format!("whatsapp:{}", self.config.from_number)),
            ("ContentSid", self.config.content_sid.clone()),
            ("ContentVariables", variables),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(InfraError::Http)?;

        let status = response.status();
        if status.as_u16() == 201 {
            info!(
                to = %mask_identity(to),
                event = "whatsapp_sent",
                "WhatsApp verification message accepted by Twilio"
            );
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(
                to = %mask_identity(to),
                status = %status,
                body = %body,
                "Twilio rejected the WhatsApp message"
            );
            Err(InfraError::Messenger(format!(
                "Twilio returned status {}",
                status
            )))
        }
    }
}

#[async_trait]
impl CodeMessenger for TwilioMessenger {
    async fn deliver_code(&self, identity: &str, code: &str) -> Result<(), String> {
        self.send_content_message(identity, code)
            .await
            .map_err(|e| e.to_string())
    }
}
