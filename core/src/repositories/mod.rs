//! Repository traits defining persistence contracts.
//!
//! Implementations live in the infrastructure crate; in-memory mocks for
//! tests live alongside each trait.

pub mod contact;
pub mod verification_code;

// Re-export repository traits
pub use contact::ContactRepository;
pub use verification_code::VerificationCodeRepository;

#[cfg(test)]
pub use contact::InMemoryContactRepository;
#[cfg(test)]
pub use verification_code::InMemoryVerificationCodeRepository;
