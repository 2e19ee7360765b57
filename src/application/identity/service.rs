//! User management service: application-layer orchestration
//!
//! All user-related business logic lives here.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    validate_create, validate_update, DomainResult, User, UserFields, UserRepositoryInterface,
};
use crate::shared::{validate_pagination, PaginatedResult};

/// Page size limits applied to list queries.
#[derive(Debug, Clone, Copy)]
pub struct ListLimits {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

impl Default for ListLimits {
    fn default() -> Self {
        Self {
            default_per_page: 10,
            max_per_page: 100,
        }
    }
}

/// User service: orchestrates every use-case of the user store.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete storage.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
    limits: ListLimits,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>, limits: ListLimits) -> Self {
        Self { repo, limits }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// List users one page at a time. Raw values are clamped, never rejected.
    pub async fn list_users(
        &self,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> PaginatedResult<User> {
        let params = validate_pagination(
            page,
            per_page,
            self.limits.default_per_page,
            self.limits.max_per_page,
        );
        self.repo.list_users(params).await
    }

    /// Get a single user by ID.
    pub async fn get_user(&self, id: u64) -> DomainResult<User> {
        self.repo.get_user_by_id(id).await
    }

    /// Number of live records.
    pub async fn count_users(&self) -> usize {
        self.repo.count_users().await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Validate the submitted fields and store a new user.
    pub async fn create_user(&self, fields: UserFields) -> DomainResult<User> {
        let dto = validate_create(fields)?;
        let user = self.repo.create_user(dto).await?;

        info!(user_id = user.id, email = %user.email, "User created");
        Ok(user)
    }

    /// Apply the fields present in the payload to an existing user.
    pub async fn update_user(&self, id: u64, fields: UserFields) -> DomainResult<User> {
        let dto = validate_update(fields)?;
        let user = self.repo.update_user(id, dto).await?;

        info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Delete a user by ID, returning the removed record.
    pub async fn delete_user(&self, id: u64) -> DomainResult<User> {
        let user = self.repo.delete_user(id).await?;

        info!(user_id = id, "User deleted");
        Ok(user)
    }

    /// Reload the seed set. Development utility.
    pub async fn reset(&self) -> usize {
        let seeded = self.repo.reset().await;

        info!(total_users = seeded.len(), "User store reset");
        seeded.len()
    }
}
