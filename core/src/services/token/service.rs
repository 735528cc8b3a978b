//! Session token issuance and verification

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing;

use crate::domain::entities::session::SessionClaims;
use crate::errors::{CoreError, CoreResult};

use super::config::TokenIssuerConfig;

/// Issuer and verifier for admin session tokens
///
/// Tokens are signed with HS256 and decoded with a validation that pins
/// that algorithm, so a token presented with any other algorithm is
/// rejected outright.
pub struct TokenIssuer {
    config: TokenIssuerConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    /// Create a new token issuer from configuration
    pub fn new(config: TokenIssuerConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a session token for a verified identity
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed JWT
    /// * `Err(CoreError::Internal)` - Signing failed
    pub fn issue(&self, identity: &str) -> CoreResult<String> {
        let claims = SessionClaims::new(identity, self.config.session_ttl_hours);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            CoreError::Internal {
                message: format!("failed to sign session token: {}", e),
            }
        })
    }

    /// Verify a session token and return its claims
    ///
    /// Every rejection collapses into `Unauthorized`; the concrete reason
    /// is only logged, never surfaced to the caller.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionClaims)` - The decoded claims with a usable identity
    /// * `Err(CoreError::Unauthorized)` - Malformed, tampered, expired,
    ///   wrongly signed, or missing a subject
    pub fn verify(&self, token: &str) -> CoreResult<SessionClaims> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                tracing::debug!(error = %e, "Session token rejected");
                CoreError::Unauthorized
            },
        )?;

        if data.claims.sub.trim().is_empty() {
            tracing::debug!("Session token carried a blank subject");
            return Err(CoreError::Unauthorized);
        }

        Ok(data.claims)
    }
}
