use async_trait::async_trait;

use super::{CreateUserDto, UpdateUserDto, User};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

/// Store of user records.
///
/// Each method is atomic with respect to every other: the email uniqueness
/// check and the write it guards happen under the same lock.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn list_users(&self, params: PaginationParams) -> PaginatedResult<User>;
    async fn get_user_by_id(&self, id: u64) -> DomainResult<User>;
    async fn count_users(&self) -> usize;

    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User>;
    async fn update_user(&self, id: u64, dto: UpdateUserDto) -> DomainResult<User>;
    async fn delete_user(&self, id: u64) -> DomainResult<User>;

    /// Drop every record, restart ids at 1 and load the seed set.
    async fn reset(&self) -> Vec<User>;
}
