//! Mock messenger implementation
//!
//! A mock messenger for development and testing. Codes are written to the
//! log instead of being sent anywhere, which is also why configuration
//! validation refuses this messenger in production.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use lark_core::services::verification::CodeMessenger;
use lark_shared::utils::validation::mask_identity;

/// Mock messenger that logs codes instead of delivering them
#[derive(Clone)]
pub struct MockMessenger {
    /// Counter for tracking number of deliveries
    delivery_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockMessenger {
    /// Create a new mock messenger
    pub fn new() -> Self {
        Self {
            delivery_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock messenger that fails every delivery
    pub fn failing() -> Self {
        Self {
            delivery_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Get the total number of deliveries
    pub fn delivery_count(&self) -> u64 {
        self.delivery_count.load(Ordering::SeqCst)
    }
}

impl Default for MockMessenger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeMessenger for MockMessenger {
    async fn deliver_code(&self, identity: &str, code: &str) -> Result<(), String> {
        if self.simulate_failure {
            warn!(
                identity = %mask_identity(identity),
                "Mock messenger simulating a delivery failure"
            );
            return Err("simulated delivery failure".to_string());
        }

        let count = self.delivery_count.fetch_add(1, Ordering::SeqCst) + 1;

        // The whole point of the mock is making the code visible to a
        // developer, so it is logged in the clear.
        info!(
            target: "messenger",
            provider = "mock",
            identity = %mask_identity(identity),
            code = code,
            delivery = count,
            "MOCK delivery of verification code"
        );

        Ok(())
    }
}
