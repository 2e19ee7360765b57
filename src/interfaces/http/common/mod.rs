//! Shared HTTP building blocks: response envelope, boundary error type,
//! JSON body extractor.

pub mod envelope;
pub mod error;
pub mod json_object;

pub use envelope::ApiResponse;
pub use error::{panic_response, ApiError};
pub use json_object::JsonObject;
