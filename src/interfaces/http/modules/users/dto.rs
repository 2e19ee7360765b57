//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::User;

/// User API representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u64,
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            age: u.age,
            department: u.department,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// List users query parameters.
///
/// Values that are not integers fall back to the defaults.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersParams {
    /// Page number (1-based). Default: 1
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Page size. Default: 10, capped at the configured maximum
    #[param(value_type = Option<i64>)]
    pub per_page: Option<String>,
}

impl ListUsersParams {
    pub fn page(&self) -> Option<i64> {
        lenient_int(self.page.as_deref())
    }

    pub fn per_page(&self) -> Option<i64> {
        lenient_int(self.per_page.as_deref())
    }
}

fn lenient_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// One page of users
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    /// Total number of pages
    pub pages: u64,
}

/// Snapshot of a removed user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedUserDto {
    pub deleted_user: UserDto,
}

/// Result of a store reset
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResetDto {
    pub total_users: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_query_values_fall_back() {
        let params = ListUsersParams {
            page: Some("abc".into()),
            per_page: Some(" 5 ".into()),
        };
        assert_eq!(params.page(), None);
        assert_eq!(params.per_page(), Some(5));
    }

    #[test]
    fn negative_query_values_parse() {
        let params = ListUsersParams {
            page: Some("-2".into()),
            per_page: None,
        };
        assert_eq!(params.page(), Some(-2));
        assert_eq!(params.per_page(), None);
    }
}
