//! Storage implementations

mod memory;
mod seed;

pub use memory::InMemoryUserRepository;
pub use seed::seed_users;
