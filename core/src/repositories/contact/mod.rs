//! Contact repository abstraction.

pub mod repository;

#[cfg(test)]
pub mod mock;

pub use repository::ContactRepository;

#[cfg(test)]
pub use mock::InMemoryContactRepository;
