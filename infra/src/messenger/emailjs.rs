//! EmailJS delivery
//!
//! Sends verification codes by email through the EmailJS REST API. The
//! template is managed in the EmailJS dashboard; this client only fills in
//! its parameters.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

use lark_core::services::verification::CodeMessenger;
use lark_shared::utils::validation::mask_identity;

use crate::InfraError;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS configuration
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    /// EmailJS service id
    pub service_id: String,
    /// EmailJS template id
    pub template_id: String,
    /// EmailJS public user id
    pub user_id: String,
    /// Private access token, empty when the account does not use one
    pub access_token: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl EmailJsConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfraError> {
        let service_id = std::env::var("EMAILJS_SERVICE_ID")
            .map_err(|_| InfraError::Config("EMAILJS_SERVICE_ID is not set".to_string()))?;
        let template_id = std::env::var("EMAILJS_TEMPLATE_ID")
            .map_err(|_| InfraError::Config("EMAILJS_TEMPLATE_ID is not set".to_string()))?;
        let user_id = std::env::var("EMAILJS_USER_ID")
            .map_err(|_| InfraError::Config("EMAILJS_USER_ID is not set".to_string()))?;

        Ok(Self {
            service_id,
            template_id,
            user_id,
            access_token: std::env::var("EMAILJS_ACCESS_TOKEN").unwrap_or_default(),
            request_timeout_secs: std::env::var("EMAILJS_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

/// Request body for the EmailJS send endpoint
#[derive(Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken")]
    access_token: &'a str,
    template_params: TemplateParams<'a>,
}

/// Parameters substituted into the EmailJS template
#[derive(Serialize)]
struct TemplateParams<'a> {
    to_name: &'a str,
    destination: String,
    firstname: &'a str,
    lastname: &'a str,
    email: &'a str,
    message: &'a str,
}

/// EmailJS messenger implementation
pub struct EmailJsMessenger {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJsMessenger {
    /// Create a new EmailJS messenger
    pub fn new(config: EmailJsConfig) -> Result<Self, InfraError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfraError::Http)?;

        info!(service_id = %config.service_id, "EmailJS messenger initialized");

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfraError> {
        Self::new(EmailJsConfig::from_env()?)
    }

    async fn send_code_email(&self, to: &str, code: &str) -> Result<(), InfraError> {
        let body = SendEmailRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.user_id,
            access_token: &self.config.access_token,
            template_params: TemplateParams {
                to_name: "Larkspur member",
                destination: format!("Your verification code is: {}", code),
                firstname: "",
                lastname: "",
                email: to,
                message: "Please use this code to verify your admin access.",
            },
        };

        let response = self
            .client
            .post(EMAILJS_SEND_URL)
            .json(&body)
            .send()
            .await
            .map_err(InfraError::Http)?;

        let status = response.status();
        if status.is_success() {
            info!(
                to = %mask_identity(to),
                event = "email_sent",
                "Verification email accepted by EmailJS"
            );
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(
                to = %mask_identity(to),
                status = %status,
                body = %body,
                "EmailJS rejected the verification email"
            );
            Err(InfraError::Messenger(format!(
                "EmailJS returned status {}",
                status
            )))
        }
    }
}

#[async_trait]
impl CodeMessenger for EmailJsMessenger {
    async fn deliver_code(&self, identity: &str, code: &str) -> Result<(), String> {
        self.send_code_email(identity, code)
            .await
            .map_err(|e| e.to_string())
    }
}
