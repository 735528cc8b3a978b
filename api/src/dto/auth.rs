use serde::{Deserialize, Serialize};
use validator::Validate;

/// Acknowledgement body returned by send-verification regardless of whether
/// the identity is on the allow-list
pub const GENERIC_ACK: &str = "If the identity was valid, you'll receive a verification code";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendVerificationRequest {
    /// Email address or E.164 phone number to deliver the code to
    /// Examples: "admin@example.com", "+61412345678"
    #[validate(length(min = 3, max = 255))]
    pub identity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// Identity the code was requested for
    #[validate(length(min = 3, max = 255))]
    pub identity: String,

    /// The code the caller received; length is compared, not validated,
    /// so a wrong-length guess counts as a mismatch rather than bad input
    #[validate(length(min = 1, max = 32))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendVerificationResponse {
    pub message: String,
}

impl SendVerificationResponse {
    pub fn ack() -> Self {
        Self {
            message: GENERIC_ACK.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub message: String,
    pub token: String,
}
