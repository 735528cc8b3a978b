//! Common utility functions

pub mod validation;

// Re-export commonly used utilities
pub use validation::*;