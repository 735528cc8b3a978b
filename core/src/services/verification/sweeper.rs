//! Background sweeping of expired verification codes
//!
//! Expired rows are harmless to correctness because expiry is re-checked
//! at comparison time, but sweeping keeps the table small and the
//! newest-row lookup cheap.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::errors::CoreResult;
use crate::repositories::VerificationCodeRepository;

/// Configuration for the code sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run a sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether to run the background task at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

/// Service for removing expired verification codes in the background
pub struct CodeSweeper<R: VerificationCodeRepository + 'static> {
    repository: Arc<R>,
    config: SweeperConfig,
}

impl<R: VerificationCodeRepository> CodeSweeper<R> {
    /// Create a new code sweeper
    pub fn new(repository: Arc<R>, config: SweeperConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single sweep cycle
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - Number of expired codes removed
    /// * `Err(CoreError)` - The sweep failed
    pub async fn run_sweep(&self) -> CoreResult<u64> {
        if !self.config.enabled {
            return Ok(0);
        }

        let removed = self.repository.sweep_expired(Utc::now()).await?;
        if removed > 0 {
            info!(removed, "Swept expired verification codes");
        }
        Ok(removed)
    }

    /// Start the sweeper as a background task
    ///
    /// This spawns a tokio task that runs a sweep at regular intervals.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Verification code sweeper is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Verification code sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_sweep().await {
                    error!("Verification code sweep failed: {}", e);
                }
            }
        });
    }
}
