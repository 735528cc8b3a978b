//! Verification service module for one-time admin login codes
//!
//! This module provides the complete verification code workflow including:
//! - Cryptographically secure code generation
//! - Code delivery through a pluggable messenger
//! - Code submission with constant-time comparison
//! - Session token issuance on successful verification
//! - Background sweeping of expired codes

mod config;
mod generator;
mod service;
mod sweeper;
mod traits;
mod types;


pub use config::VerificationPolicy;
pub use generator::CodeGenerator;
pub use service::VerificationService;
pub use sweeper::{CodeSweeper, SweeperConfig};
pub use traits::CodeMessenger;
pub use types::{RequestOutcome, SessionGrant};
