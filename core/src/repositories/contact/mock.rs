//! In-memory contact repository for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::Contact;
use crate::errors::{CoreError, CoreResult};

use super::repository::ContactRepository;

pub struct InMemoryContactRepository {
    pub rows: Arc<Mutex<Vec<Contact>>>,
    pub should_fail: bool,
}

impl InMemoryContactRepository {
    pub fn new(should_fail: bool) -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn save(&self, contact: Contact) -> CoreResult<Contact> {
        if self.should_fail {
            return Err(CoreError::Internal {
                message: "mock save failure".to_string(),
            });
        }
        self.rows.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn find_all(&self) -> CoreResult<Vec<Contact>> {
        if self.should_fail {
            return Err(CoreError::Internal {
                message: "mock lookup failure".to_string(),
            });
        }
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn delete_by_id(&self, id: Uuid) -> CoreResult<u64> {
        if self.should_fail {
            return Err(CoreError::Internal {
                message: "mock delete failure".to_string(),
            });
        }
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok((before - rows.len()) as u64)
    }
}
