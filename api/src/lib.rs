//! HTTP surface for the Larkspur backend
//!
//! Routes, DTOs, error mapping, and the session-guard middleware. The
//! binary in `main.rs` wires configuration, the database pool, and the
//! outbound messenger into [`app::create_app`].

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
