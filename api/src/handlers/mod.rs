pub mod error;

pub use error::{error_response, validation_error_response};
