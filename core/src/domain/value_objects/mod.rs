//! Value objects representing immutable domain concepts.

pub mod admin;

// Re-export commonly used types
pub use admin::AdminAllowlist;
