//! In-memory verification code repository for tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::VerificationCode;
use crate::errors::{CoreError, CoreResult};

use super::repository::VerificationCodeRepository;

/// Vec-backed repository with the same lookup semantics as the MySQL one
pub struct InMemoryVerificationCodeRepository {
    pub rows: Arc<Mutex<Vec<VerificationCode>>>,
    pub should_fail: bool,
    pub fail_deletes: bool,
}

impl InMemoryVerificationCodeRepository {
    pub fn new(should_fail: bool) -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            should_fail,
            fail_deletes: false,
        }
    }

    pub fn with_failing_deletes() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
            fail_deletes: true,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn rows_for(&self, identity: &str) -> Vec<VerificationCode> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.identity == identity)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl VerificationCodeRepository for InMemoryVerificationCodeRepository {
    async fn save(&self, code: VerificationCode) -> CoreResult<VerificationCode> {
        if self.should_fail {
            return Err(CoreError::Internal {
                message: "mock save failure".to_string(),
            });
        }
        self.rows.lock().unwrap().push(code.clone());
        Ok(code)
    }

    async fn find_latest(&self, identity: &str) -> CoreResult<Option<VerificationCode>> {
        if self.should_fail {
            return Err(CoreError::Internal {
                message: "mock lookup failure".to_string(),
            });
        }
        // max_by_key keeps the last of equals, so insertion order breaks ties
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.identity == identity)
            .max_by_key(|row| row.created_at)
            .cloned())
    }

    async fn delete_by_id(&self, id: Uuid) -> CoreResult<()> {
        if self.should_fail || self.fail_deletes {
            return Err(CoreError::Internal {
                message: "mock delete failure".to_string(),
            });
        }
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }

    async fn delete_by_identity(&self, identity: &str) -> CoreResult<u64> {
        if self.should_fail || self.fail_deletes {
            return Err(CoreError::Internal {
                message: "mock delete failure".to_string(),
            });
        }
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.identity != identity);
        Ok((before - rows.len()) as u64)
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> CoreResult<u64> {
        if self.should_fail {
            return Err(CoreError::Internal {
                message: "mock sweep failure".to_string(),
            });
        }
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.expires_at >= now);
        Ok((before - rows.len()) as u64)
    }
}
