//! User field validation
//!
//! Turns loosely-typed [`UserFields`] into typed DTOs. Every violated rule is
//! collected; a request never stops at its first failure.
//!
//! | Field      | Create   | Update   | Rule                                 |
//! |------------|----------|----------|--------------------------------------|
//! | name       | required | optional | non-empty string                     |
//! | email      | required | optional | non-empty, contains `@` and `.`      |
//! | age        | required | optional | integer >= 0                         |
//! | department | optional | optional | string, default `""`                 |
//!
//! Email uniqueness is not checked here; it needs the store's lock.

use std::borrow::Cow;

use serde_json::Value;
use validator::{Validate, ValidationError};

use super::{CreateUserDto, UpdateUserDto, UserFields};
use crate::domain::{DomainError, DomainResult};

const FIELD_ORDER: [&str; 4] = ["name", "email", "age", "department"];

const AGE_MESSAGE: &str = "Age must be a non-negative integer";

/// Typed view of the submitted fields, before any rule has been applied.
#[derive(Debug, Default, Validate)]
struct Candidate {
    #[validate(length(min = 1, message = "'name' must be a non-empty string"))]
    name: Option<String>,
    #[validate(custom(function = "validate_email_shape"))]
    email: Option<String>,
    age: Option<u64>,
    department: Option<String>,
}

/// Validate a create payload. `name`, `email` and `age` are required.
pub fn validate_create(fields: UserFields) -> DomainResult<CreateUserDto> {
    let (candidate, errors) = parse(fields, true);

    match (candidate.name, candidate.email, candidate.age) {
        (Some(name), Some(email), Some(age)) if errors.is_empty() => Ok(CreateUserDto {
            name,
            email,
            age,
            department: candidate.department.unwrap_or_default(),
        }),
        _ => Err(DomainError::Validation(errors)),
    }
}

/// Validate an update payload. Every field is optional, but a present
/// field must satisfy the same rules as on create.
pub fn validate_update(fields: UserFields) -> DomainResult<UpdateUserDto> {
    let (candidate, errors) = parse(fields, false);

    if !errors.is_empty() {
        return Err(DomainError::Validation(errors));
    }

    Ok(UpdateUserDto {
        name: candidate.name,
        email: candidate.email,
        age: candidate.age,
        department: candidate.department,
    })
}

/// Shape check only: non-empty and contains both `@` and `.`.
pub fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if !email.is_empty() && email.contains('@') && email.contains('.') {
        return Ok(());
    }
    let mut err = ValidationError::new("email_format");
    err.message = Some(Cow::Borrowed("Invalid email format"));
    Err(err)
}

/// Extract typed values, then apply the rules. Errors are reported in
/// field order; within a field, a presence or type problem comes first.
fn parse(fields: UserFields, required: bool) -> (Candidate, Vec<String>) {
    let mut ranked = Vec::new();

    let candidate = Candidate {
        name: take_string(fields.name, "name", required, &mut ranked),
        email: take_string(fields.email, "email", required, &mut ranked),
        age: take_age(fields.age, required, &mut ranked),
        department: take_string(fields.department, "department", false, &mut ranked),
    };

    ranked.extend(rule_violations(&candidate));
    // Stable sort keeps the per-field order intact.
    ranked.sort_by_key(|(rank, _)| *rank);
    let errors = ranked.into_iter().map(|(_, msg)| msg).collect();
    (candidate, errors)
}

fn rank_of(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|known| field == *known)
        .unwrap_or(FIELD_ORDER.len())
}

fn take_string(
    value: Option<Value>,
    field: &str,
    required: bool,
    errors: &mut Vec<(usize, String)>,
) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push((rank_of(field), format!("'{}' must be a string", field)));
            None
        }
        None => {
            if required {
                errors.push((rank_of(field), format!("'{}' is required", field)));
            }
            None
        }
    }
}

fn take_age(
    value: Option<Value>,
    required: bool,
    errors: &mut Vec<(usize, String)>,
) -> Option<u64> {
    match value {
        Some(v) => {
            let age = v.as_u64();
            if age.is_none() {
                errors.push((rank_of("age"), AGE_MESSAGE.to_string()));
            }
            age
        }
        None => {
            if required {
                errors.push((rank_of("age"), "'age' is required".to_string()));
            }
            None
        }
    }
}

fn rule_violations(candidate: &Candidate) -> Vec<(usize, String)> {
    let Err(report) = candidate.validate() else {
        return Vec::new();
    };

    report
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let rank = rank_of(field);
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("'{}' is invalid", field));
                (rank, msg)
            })
        })
        .collect()
}
