//! Domain errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// One or more field rules were violated. All violations of a single
    /// request are carried together.
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{0}")]
    Conflict(String),
}

impl DomainError {
    pub fn user_not_found(id: u64) -> Self {
        Self::NotFound { entity: "User", id }
    }

    pub fn duplicate_email() -> Self {
        Self::Conflict("User with this email already exists".into())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_joins_all_violations() {
        let err = DomainError::Validation(vec![
            "'name' is required".into(),
            "Invalid email format".into(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation errors: 'name' is required; Invalid email format"
        );
    }

    #[test]
    fn not_found_names_the_id() {
        assert_eq!(
            DomainError::user_not_found(42).to_string(),
            "User with ID 42 not found"
        );
    }
}
