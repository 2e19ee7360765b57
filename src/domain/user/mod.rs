//! User aggregate
//!
//! Contains the User entity, DTOs, validation rules and repository interface.

pub mod model;
pub mod repository;
pub mod validation;

mod dto_create;
mod dto_fields;
mod dto_update;

pub use model::User;

pub use dto_create::CreateUserDto;
pub use dto_fields::UserFields;
pub use dto_update::UpdateUserDto;

pub use repository::UserRepositoryInterface;
pub use validation::{validate_create, validate_update};
