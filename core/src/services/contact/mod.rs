//! Contact service module for intake submissions

mod service;

pub use service::ContactService;
