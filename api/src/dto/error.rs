use serde::{Deserialize, Serialize};

/// Error body shared by every non-2xx response
///
/// Single field on purpose: the message is already generic wherever detail
/// would help someone probe admin identities or code state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
