//! MySQL implementation of the VerificationCodeRepository trait.
//!
//! This module provides the concrete implementation of verification code
//! persistence using MySQL with SQLx.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use lark_core::domain::entities::VerificationCode;
use lark_core::errors::{CoreError, CoreResult};
use lark_core::repositories::VerificationCodeRepository;

/// MySQL implementation of VerificationCodeRepository
///
/// The table is append-mostly: `save` always inserts and nothing enforces
/// one live code per identity. `find_latest` picks the newest row by
/// `created_at`; expiry is the caller's concern, not the query's.
pub struct MySqlVerificationCodeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    /// Create a new MySQL verification code repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to VerificationCode entity
    fn row_to_code(row: &sqlx::mysql::MySqlRow) -> CoreResult<VerificationCode> {
        let id: String = row.try_get("id").map_err(|e| CoreError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(VerificationCode {
            id: Uuid::parse_str(&id).map_err(|e| CoreError::Internal {
                message: format!("Invalid code UUID: {}", e),
            })?,
            identity: row.try_get("identity").map_err(|e| CoreError::Internal {
                message: format!("Failed to get identity: {}", e),
            })?,
            code: row.try_get("code").map_err(|e| CoreError::Internal {
                message: format!("Failed to get code: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| CoreError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| CoreError::Internal {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    async fn save(&self, code: VerificationCode) -> CoreResult<VerificationCode> {
        let query = r#"
            INSERT INTO verification_codes (
                id, identity, code, created_at, expires_at
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(code.id.to_string())
            .bind(&code.identity)
            .bind(&code.code)
            .bind(code.created_at)
            .bind(code.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| CoreError::Internal {
                message: format!("Failed to save verification code: {}", e),
            })?;

        Ok(code)
    }

    async fn find_latest(&self, identity: &str) -> CoreResult<Option<VerificationCode>> {
        let query = r#"
            SELECT id, identity, code, created_at, expires_at
            FROM verification_codes
            WHERE identity = ?
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(identity)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CoreError::Internal {
                message: format!("Failed to find verification code: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_code(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> CoreResult<()> {
        sqlx::query("DELETE FROM verification_codes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| CoreError::Internal {
                message: format!("Failed to delete verification code: {}", e),
            })?;

        Ok(())
    }

    async fn delete_by_identity(&self, identity: &str) -> CoreResult<u64> {
        let result = sqlx::query("DELETE FROM verification_codes WHERE identity = ?")
            .bind(identity)
            .execute(&self.pool)
            .await
            .map_err(|e| CoreError::Internal {
                message: format!("Failed to delete verification codes: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> CoreResult<u64> {
        let result = sqlx::query("DELETE FROM verification_codes WHERE expires_at < ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| CoreError::Internal {
                message: format!("Failed to sweep expired codes: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
