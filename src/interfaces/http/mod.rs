//! HTTP REST API interfaces
//!
//! - `common`: response envelope, boundary error type, JSON body extractor
//! - `modules`: handlers grouped by resource, plus request-id and metrics middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState};
