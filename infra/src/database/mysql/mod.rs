//! MySQL repository implementations

pub mod contact_repository_impl;
pub mod verification_code_repository_impl;

pub use contact_repository_impl::MySqlContactRepository;
pub use verification_code_repository_impl::MySqlVerificationCodeRepository;
