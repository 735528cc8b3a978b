//! Verification code repository abstraction.

pub mod repository;

#[cfg(test)]
pub mod mock;

pub use repository::VerificationCodeRepository;

#[cfg(test)]
pub use mock::InMemoryVerificationCodeRepository;
