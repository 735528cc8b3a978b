//! Business services containing domain logic and use cases.

pub mod contact;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use contact::ContactService;
pub use token::{TokenIssuer, TokenIssuerConfig};
pub use verification::{
    CodeGenerator, CodeMessenger, CodeSweeper, RequestOutcome, SessionGrant, SweeperConfig,
    VerificationPolicy, VerificationService,
};
