//! MySQL implementation of the ContactRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use lark_core::domain::entities::Contact;
use lark_core::errors::{CoreError, CoreResult};
use lark_core::repositories::ContactRepository;

/// MySQL implementation of ContactRepository
pub struct MySqlContactRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlContactRepository {
    /// Create a new MySQL contact repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Contact entity
    fn row_to_contact(row: &sqlx::mysql::MySqlRow) -> CoreResult<Contact> {
        let id: String = row.try_get("id").map_err(|e| CoreError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Contact {
            id: Uuid::parse_str(&id).map_err(|e| CoreError::Internal {
                message: format!("Invalid contact UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| CoreError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| CoreError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            message: row.try_get("message").map_err(|e| CoreError::Internal {
                message: format!("Failed to get message: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| CoreError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl ContactRepository for MySqlContactRepository {
    async fn save(&self, contact: Contact) -> CoreResult<Contact> {
        let query = r#"
            INSERT INTO contacts (
                id, name, email, message, created_at
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(contact.id.to_string())
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.message)
            .bind(contact.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| CoreError::Internal {
                message: format!("Failed to save contact: {}", e),
            })?;

        Ok(contact)
    }

    async fn find_all(&self) -> CoreResult<Vec<Contact>> {
        let query = r#"
            SELECT id, name, email, message, created_at
            FROM contacts
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CoreError::Internal {
                message: format!("Failed to list contacts: {}", e),
            })?;

        let mut contacts = Vec::new();
        for row in rows {
            contacts.push(Self::row_to_contact(&row)?);
        }

        Ok(contacts)
    }

    async fn delete_by_id(&self, id: Uuid) -> CoreResult<u64> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| CoreError::Internal {
                message: format!("Failed to delete contact: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
