//! Shared fixtures for the API integration tests
//!
//! In-memory repositories and a recording messenger stand in for MySQL and
//! the delivery providers; everything else under test is the real wiring.

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use lark_api::app::AppState;
use lark_core::domain::entities::{Contact, VerificationCode};
use lark_core::domain::value_objects::AdminAllowlist;
use lark_core::errors::{CoreError, CoreResult};
use lark_core::repositories::{ContactRepository, VerificationCodeRepository};
use lark_core::services::{
    CodeMessenger, ContactService, TokenIssuer, TokenIssuerConfig, VerificationPolicy,
    VerificationService,
};

pub const ADMIN: &str = "admin@example.com";
pub const TEST_SECRET: &str = "integration-test-secret";

/// In-memory verification code store
pub struct MemoryCodeRepository {
    rows: Mutex<Vec<VerificationCode>>,
    should_fail: bool,
}

impl MemoryCodeRepository {
    pub fn new(should_fail: bool) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            should_fail,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn seed(&self, code: VerificationCode) {
        self.rows.lock().unwrap().push(code);
    }

    fn fail_check(&self) -> CoreResult<()> {
        if self.should_fail {
            Err(CoreError::Internal {
                message: "simulated repository failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl VerificationCodeRepository for MemoryCodeRepository {
    async fn save(&self, code: VerificationCode) -> CoreResult<VerificationCode> {
        self.fail_check()?;
        self.rows.lock().unwrap().push(code.clone());
        Ok(code)
    }

    async fn find_latest(&self, identity: &str) -> CoreResult<Option<VerificationCode>> {
        self.fail_check()?;
        let rows = self.rows.lock().unwrap();
        let latest = rows
            .iter()
            .filter(|row| row.identity == identity)
            .max_by_key(|row| row.created_at)
            .cloned();
        Ok(latest)
    }

    async fn delete_by_id(&self, id: Uuid) -> CoreResult<()> {
        self.fail_check()?;
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }

    async fn delete_by_identity(&self, identity: &str) -> CoreResult<u64> {
        self.fail_check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.identity != identity);
        Ok((before - rows.len()) as u64)
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> CoreResult<u64> {
        self.fail_check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.expires_at >= now);
        Ok((before - rows.len()) as u64)
    }
}

/// In-memory contact store
pub struct MemoryContactRepository {
    rows: Mutex<Vec<Contact>>,
}

impl MemoryContactRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn save(&self, contact: Contact) -> CoreResult<Contact> {
        self.rows.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn find_all(&self) -> CoreResult<Vec<Contact>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn delete_by_id(&self, id: Uuid) -> CoreResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok((before - rows.len()) as u64)
    }
}

/// Messenger that records deliveries instead of sending them
pub struct RecordingMessenger {
    pub sent: Mutex<Vec<(String, String)>>,
    should_fail: bool,
}

impl RecordingMessenger {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail,
        }
    }

    pub fn delivery_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// The most recently delivered code for an identity
    pub fn last_code_for(&self, identity: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == identity)
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl CodeMessenger for RecordingMessenger {
    async fn deliver_code(&self, identity: &str, code: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("simulated delivery failure".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((identity.to_string(), code.to_string()));
        Ok(())
    }
}

/// Everything a test needs: the app state plus handles to the fakes
pub struct TestHarness {
    pub state: web::Data<AppState<MemoryCodeRepository, MemoryContactRepository, RecordingMessenger>>,
    pub code_repository: Arc<MemoryCodeRepository>,
    pub contact_repository: Arc<MemoryContactRepository>,
    pub messenger: Arc<RecordingMessenger>,
    pub tokens: Arc<TokenIssuer>,
}

pub fn harness() -> TestHarness {
    harness_with(false, false)
}

pub fn harness_with(messenger_fails: bool, repository_fails: bool) -> TestHarness {
    let code_repository = Arc::new(MemoryCodeRepository::new(repository_fails));
    let contact_repository = Arc::new(MemoryContactRepository::new());
    let messenger = Arc::new(RecordingMessenger::new(messenger_fails));
    let tokens = Arc::new(TokenIssuer::new(TokenIssuerConfig {
        jwt_secret: TEST_SECRET.to_string(),
        session_ttl_hours: 24,
    }));

    let verification = Arc::new(VerificationService::new(
        code_repository.clone(),
        messenger.clone(),
        tokens.clone(),
        AdminAllowlist::new([ADMIN]),
        VerificationPolicy::default(),
    ));
    let contacts = Arc::new(ContactService::new(contact_repository.clone()));

    let state = web::Data::new(AppState {
        verification,
        contacts,
        tokens: tokens.clone(),
    });

    TestHarness {
        state,
        code_repository,
        contact_repository,
        messenger,
        tokens,
    }
}
