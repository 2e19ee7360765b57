//! User domain entity

use chrono::{DateTime, Utc};

/// User record owned by the store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u64,
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh record; both timestamps start at `now`.
    pub fn new(id: u64, dto: super::CreateUserDto, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: dto.name,
            email: dto.email,
            age: dto.age,
            department: dto.department,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the fields present in `dto` and refresh `updated_at`.
    ///
    /// `updated_at` never moves before `created_at`, even if the wall clock
    /// stepped backwards since creation.
    pub fn apply(&mut self, dto: super::UpdateUserDto, now: DateTime<Utc>) {
        if let Some(name) = dto.name {
            self.name = name;
        }
        if let Some(email) = dto.email {
            self.email = email;
        }
        if let Some(age) = dto.age {
            self.age = age;
        }
        if let Some(department) = dto.department {
            self.department = department;
        }
        self.updated_at = now.max(self.created_at);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::{CreateUserDto, UpdateUserDto};

    fn sample() -> User {
        User::new(
            7,
            CreateUserDto {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                age: 36,
                department: String::new(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn new_user_has_equal_timestamps() {
        let user = sample();
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.department, "");
    }

    #[test]
    fn apply_changes_only_present_fields() {
        let mut user = sample();
        user.apply(
            UpdateUserDto {
                age: Some(37),
                ..Default::default()
            },
            user.created_at + Duration::seconds(5),
        );
        assert_eq!(user.age, 37);
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert!(user.updated_at > user.created_at);
    }

    #[test]
    fn apply_never_moves_updated_at_before_created_at() {
        let mut user = sample();
        let earlier = user.created_at - Duration::hours(1);
        user.apply(UpdateUserDto::default(), earlier);
        assert_eq!(user.updated_at, user.created_at);
    }
}
