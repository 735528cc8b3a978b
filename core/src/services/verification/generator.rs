//! Cryptographically secure verification code generation

use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{CoreError, CoreResult};

/// Generator for fixed-length decimal verification codes
///
/// Codes are drawn from the OS CSPRNG and reduced to the decimal range
/// with rejection sampling, so every code in `[0, 10^length)` is equally
/// likely. A failure of the OS entropy source is reported as an error
/// rather than falling back to a weaker generator.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    /// Create a generator producing codes of `length` decimal digits
    ///
    /// Supports lengths up to 18 digits; `10^length` must fit in a `u64`.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Number of digits in generated codes
    pub fn length(&self) -> usize {
        self.length
    }

    /// Generate a new zero-padded verification code
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A uniformly random code of exactly `length` digits
    /// * `Err(CoreError::Internal)` - The OS RNG could not produce bytes
    pub fn generate(&self) -> CoreResult<String> {
        let bound = 10u64.pow(self.length as u32);
        // Values at or above the largest multiple of `bound` would skew
        // the low codes if reduced directly, so they are redrawn.
        let zone = u64::MAX - (u64::MAX % bound);

        let mut rng = OsRng;
        loop {
            let mut bytes = [0u8; 8];
            rng.try_fill_bytes(&mut bytes)
                .map_err(|e| CoreError::Internal {
                    message: format!("system RNG unavailable: {}", e),
                })?;

            let candidate = u64::from_le_bytes(bytes);
            if candidate < zone {
                return Ok(format!(
                    "{:0width$}",
                    candidate % bound,
                    width = self.length
                ));
            }
        }
    }
}
