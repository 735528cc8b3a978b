//! Main verification service implementation

use std::sync::Arc;

use tracing;

use lark_shared::utils::validation::{is_valid_identity, mask_identity};

use crate::domain::entities::verification_code::VerificationCode;
use crate::domain::value_objects::admin::AdminAllowlist;
use crate::errors::{CoreError, CoreResult};
use crate::repositories::VerificationCodeRepository;
use crate::services::token::TokenIssuer;

use super::config::VerificationPolicy;
use super::generator::CodeGenerator;
use super::traits::CodeMessenger;
use super::types::{RequestOutcome, SessionGrant};

/// Verification service for the one-time admin login flow
pub struct VerificationService<R: VerificationCodeRepository, M: CodeMessenger> {
    /// Repository persisting pending verification codes
    repository: Arc<R>,
    /// Messenger delivering codes to admins
    messenger: Arc<M>,
    /// Issuer for session tokens handed out after verification
    tokens: Arc<TokenIssuer>,
    /// Identities permitted to log in
    allowlist: AdminAllowlist,
    /// Code generator seeded from the configured code length
    generator: CodeGenerator,
    /// Service configuration
    policy: VerificationPolicy,
}

impl<R: VerificationCodeRepository, M: CodeMessenger> VerificationService<R, M> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `repository` - Verification code repository implementation
    /// * `messenger` - Delivery channel implementation
    /// * `tokens` - Session token issuer
    /// * `allowlist` - Admin identities permitted to verify
    /// * `policy` - Code length and lifetime configuration
    pub fn new(
        repository: Arc<R>,
        messenger: Arc<M>,
        tokens: Arc<TokenIssuer>,
        allowlist: AdminAllowlist,
        policy: VerificationPolicy,
    ) -> Self {
        let generator = CodeGenerator::new(policy.code_length);
        Self {
            repository,
            messenger,
            tokens,
            allowlist,
            generator,
            policy,
        }
    }

    /// Request a verification code for an identity
    ///
    /// This method:
    /// 1. Validates the identity format
    /// 2. Silently ignores identities not on the admin allowlist
    /// 3. Generates a new code from the OS CSPRNG
    /// 4. Persists the code before any delivery attempt
    /// 5. Hands the code to the messenger
    ///
    /// A persisted code is not rolled back when delivery fails; the row
    /// expires on its own or is removed by the sweeper.
    ///
    /// # Arguments
    ///
    /// * `identity` - The email address or phone number to send a code to
    ///
    /// # Returns
    ///
    /// * `Ok(RequestOutcome)` - `Sent` for admins, `Ignored` for anyone else
    /// * `Err(CoreError)` - Validation, persistence, or delivery failed
    pub async fn request_code(&self, identity: &str) -> CoreResult<RequestOutcome> {
        if !is_valid_identity(identity) {
            return Err(CoreError::InvalidInput {
                message: "a valid email address or phone number is required".to_string(),
            });
        }

        if !self.allowlist.contains(identity) {
            tracing::info!(
                identity = %mask_identity(identity),
                event = "request_ignored",
                "Verification request for unrecognized identity ignored"
            );
            return Ok(RequestOutcome::Ignored);
        }

        let code = self.generator.generate()?;
        let verification_code =
            VerificationCode::new_with_ttl(identity, code, self.policy.code_ttl_minutes);

        let stored = self.repository.save(verification_code).await.map_err(|e| {
            tracing::error!(
                identity = %mask_identity(identity),
                error = %e,
                event = "code_store_failed",
                "Failed to persist verification code"
            );
            e
        })?;

        tracing::info!(
            identity = %mask_identity(identity),
            event = "code_generated",
            code_id = %stored.id,
            "Generated new verification code"
        );

        self.messenger
            .deliver_code(identity, &stored.code)
            .await
            .map_err(|e| {
                tracing::error!(
                    identity = %mask_identity(identity),
                    error = %e,
                    event = "code_delivery_failed",
                    "Failed to deliver verification code"
                );
                CoreError::Delivery { message: e }
            })?;

        tracing::info!(
            identity = %mask_identity(identity),
            event = "code_sent",
            "Verification code handed to messenger"
        );

        Ok(RequestOutcome::Sent)
    }

    /// Submit a verification code and exchange it for a session token
    ///
    /// This method:
    /// 1. Validates the identity and candidate format
    /// 2. Rejects identities not on the admin allowlist
    /// 3. Loads the newest stored code for the identity
    /// 4. Re-checks expiry at comparison time and clears stale rows
    /// 5. Compares codes in constant time
    /// 6. Deletes the stored code before issuing the session token
    ///
    /// A mismatched candidate leaves the stored code in place, so a typo
    /// does not force the admin to request a fresh code.
    ///
    /// # Arguments
    ///
    /// * `identity` - The identity the code was requested for
    /// * `candidate` - The code the caller typed in
    ///
    /// # Returns
    ///
    /// * `Ok(SessionGrant)` - The identity and its signed session token
    /// * `Err(CoreError)` - The submission was rejected or a step failed
    pub async fn submit_code(&self, identity: &str, candidate: &str) -> CoreResult<SessionGrant> {
        if !is_valid_identity(identity) {
            return Err(CoreError::InvalidInput {
                message: "a valid email address or phone number is required".to_string(),
            });
        }
        if candidate.trim().is_empty() {
            return Err(CoreError::InvalidInput {
                message: "verification code is required".to_string(),
            });
        }

        if !self.allowlist.contains(identity) {
            tracing::warn!(
                identity = %mask_identity(identity),
                event = "submit_rejected",
                "Code submission for identity outside the allowlist"
            );
            return Err(CoreError::Unauthorized);
        }

        let stored = self
            .repository
            .find_latest(identity)
            .await?
            .ok_or(CoreError::NotFoundOrExpired)?;

        if stored.is_expired() {
            // Best-effort cleanup; the sweeper catches anything left behind.
            if let Err(e) = self.repository.delete_by_identity(identity).await {
                tracing::warn!(
                    identity = %mask_identity(identity),
                    error = %e,
                    "Failed to clear expired verification codes"
                );
            }
            tracing::info!(
                identity = %mask_identity(identity),
                event = "code_expired",
                code_id = %stored.id,
                "Submitted code had already expired"
            );
            return Err(CoreError::NotFoundOrExpired);
        }

        if !stored.matches(candidate) {
            tracing::warn!(
                identity = %mask_identity(identity),
                event = "code_mismatch",
                code_id = %stored.id,
                "Submitted code did not match the stored code"
            );
            return Err(CoreError::Mismatch);
        }

        // Consume the code before issuing anything so it can never be
        // exchanged twice.
        self.repository.delete_by_id(stored.id).await.map_err(|e| {
            tracing::error!(
                identity = %mask_identity(identity),
                error = %e,
                event = "code_consume_failed",
                "Failed to delete verification code after a successful match"
            );
            e
        })?;

        let token = self.tokens.issue(identity)?;

        tracing::info!(
            identity = %mask_identity(identity),
            event = "verification_succeeded",
            "Verification succeeded and a session token was issued"
        );

        Ok(SessionGrant {
            identity: identity.to_string(),
            token,
        })
    }
}
