//! Identity module: user management
//!
//! Contains the `UserService` which orchestrates all user-related
//! use-cases: listing, lookup, creation, partial updates, deletion, reset.

pub mod service;

pub use service::{ListLimits, UserService};
