//! Health module: service info and liveness

pub mod handlers;

pub use handlers::*;
