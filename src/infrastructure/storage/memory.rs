//! In-memory user store

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use super::seed::seed_users;
use crate::domain::{
    CreateUserDto, DomainError, DomainResult, UpdateUserDto, User, UserRepositoryInterface,
};
use crate::shared::{PaginatedResult, PaginationParams};

/// Records plus the id counter. Always accessed under one lock.
#[derive(Debug)]
struct StoreState {
    /// Ids are handed out in increasing order, so key order is creation order.
    users: BTreeMap<u64, User>,
    next_id: u64,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn email_taken(&self, email: &str, except: Option<u64>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }

    fn insert(&mut self, dto: CreateUserDto) -> DomainResult<User> {
        if self.email_taken(&dto.email, None) {
            return Err(DomainError::duplicate_email());
        }

        let user = User::new(self.next_id, dto, Utc::now());
        self.next_id += 1;
        self.users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// In-memory store of user records.
///
/// Nothing survives a restart. The whole state sits behind a single mutex so
/// that read-then-write sequences (uniqueness scan, then insert) stay atomic
/// under a multi-threaded runtime.
pub struct InMemoryUserRepository {
    state: Mutex<StoreState>,
}

impl InMemoryUserRepository {
    /// Empty store; ids start at 1.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::empty()),
        }
    }

    /// Store pre-loaded with the seed records (ids 1..=3).
    pub fn with_seed_data() -> Self {
        let mut state = StoreState::empty();
        load_seed(&mut state);
        Self {
            state: Mutex::new(state),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn load_seed(state: &mut StoreState) -> Vec<User> {
    seed_users()
        .into_iter()
        .filter_map(|dto| state.insert(dto).ok())
        .collect()
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn list_users(&self, params: PaginationParams) -> PaginatedResult<User> {
        let state = self.state.lock().await;
        let items: Vec<User> = state
            .users
            .values()
            .skip(params.offset())
            .take(params.per_page as usize)
            .cloned()
            .collect();
        PaginatedResult::new(items, state.users.len() as u64, params)
    }

    async fn get_user_by_id(&self, id: u64) -> DomainResult<User> {
        let state = self.state.lock().await;
        state
            .users
            .get(&id)
            .cloned()
            .ok_or(DomainError::user_not_found(id))
    }

    async fn count_users(&self) -> usize {
        self.state.lock().await.users.len()
    }

    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let mut state = self.state.lock().await;
        state.insert(dto)
    }

    async fn update_user(&self, id: u64, dto: UpdateUserDto) -> DomainResult<User> {
        let mut state = self.state.lock().await;

        let current_email = match state.users.get(&id) {
            Some(user) => user.email.clone(),
            None => return Err(DomainError::user_not_found(id)),
        };

        if let Some(email) = dto.email.as_deref() {
            if email != current_email && state.email_taken(email, Some(id)) {
                return Err(DomainError::duplicate_email());
            }
        }

        let user = state
            .users
            .get_mut(&id)
            .ok_or(DomainError::user_not_found(id))?;
        user.apply(dto, Utc::now());
        Ok(user.clone())
    }

    async fn delete_user(&self, id: u64) -> DomainResult<User> {
        let mut state = self.state.lock().await;
        state
            .users
            .remove(&id)
            .ok_or(DomainError::user_not_found(id))
    }

    async fn reset(&self) -> Vec<User> {
        let mut state = self.state.lock().await;
        *state = StoreState::empty();
        let seeded = load_seed(&mut state);
        debug!(count = seeded.len(), "store reset to seed data");
        seeded
    }
}
