//! Domain entities representing core business objects.

pub mod contact;
pub mod session;
pub mod verification_code;

// Re-export commonly used types
pub use contact::{Contact, MESSAGE_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH};
pub use session::{SessionClaims, DEFAULT_SESSION_TTL_HOURS};
pub use verification_code::{VerificationCode, DEFAULT_CODE_LENGTH, DEFAULT_CODE_TTL_MINUTES};
