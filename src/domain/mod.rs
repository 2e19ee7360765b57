//! Domain layer: entities, rules and the repository seam

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{
    validate_create, validate_update, CreateUserDto, UpdateUserDto, User, UserFields,
    UserRepositoryInterface,
};
