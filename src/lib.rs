//! # User Store Service
//!
//! Minimal in-memory CRUD service exposing user records over HTTP with
//! JSON envelopes.
//!
//! ## Architecture
//!
//! - **domain**: `User` entity, typed DTOs, validation rules, errors, repository trait
//! - **application**: `UserService`, the use-case layer
//! - **infrastructure**: the in-memory store and its seed data
//! - **interfaces**: REST API (axum) with Swagger documentation
//! - **shared**: pagination types and graceful shutdown
//! - **server**: lifecycle wrapper used by the binaries

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
