//! Verification routes: code request and code submission.

pub mod send_verification;
pub mod verify_code;

pub use send_verification::send_verification;
pub use verify_code::verify_code;
