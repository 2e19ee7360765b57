pub mod identity;

pub use identity::{ListLimits, UserService};
