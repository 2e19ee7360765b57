//! User management API handlers
//!
//! CRUD endpoints over the in-memory user store, plus the `/reset`
//! development utility. Delegates to `UserService` from the
//! application/identity layer.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{DeletedUserDto, ListUsersParams, ResetDto, UserDto, UserListDto};
use crate::application::UserService;
use crate::domain::UserFields;
use crate::infrastructure::InMemoryUserRepository;
use crate::interfaces::http::common::{ApiError, ApiResponse, JsonObject};

/// User handler state, concrete over `InMemoryUserRepository` for Axum compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
}

/// Ids must be plain ASCII digits; anything else (signs included) does not
/// name a route at all.
fn parse_user_id(raw: &str) -> Result<u64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::RouteNotFound);
    }
    raw.parse::<u64>().map_err(|_| ApiError::RouteNotFound)
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "One page of users", body = ApiResponse<UserListDto>)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
    Query(params): Query<ListUsersParams>,
) -> Json<ApiResponse<UserListDto>> {
    let result = state
        .user_service
        .list_users(params.page(), params.per_page())
        .await;

    let data = UserListDto {
        users: result.items.into_iter().map(UserDto::from).collect(),
        total: result.total,
        page: result.page,
        per_page: result.per_page,
        pages: result.total_pages,
    };

    if data.total == 0 {
        Json(ApiResponse::with_message(data, "No users found"))
    } else {
        Json(ApiResponse::success(data))
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let id = parse_user_id(&id)?;
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiResponse::success(UserDto::from(user))))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserFields,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Malformed body, validation error or duplicate email")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    JsonObject(fields): JsonObject<UserFields>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ApiError> {
    let user = state.user_service.create_user(fields).await?;
    let message = format!("User created successfully with ID {}", user.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(UserDto::from(user), message)),
    ))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User ID")),
    request_body = UserFields,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Malformed body, validation error or duplicate email"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    body: Result<JsonObject<UserFields>, ApiError>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let id = parse_user_id(&id)?;
    // An unknown id is reported before any problem with the body.
    state.user_service.get_user(id).await?;
    let JsonObject(fields) = body?;
    let user = state.user_service.update_user(id, fields).await?;
    Ok(Json(ApiResponse::with_message(
        UserDto::from(user),
        format!("User with ID {} updated successfully", id),
    )))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<DeletedUserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedUserDto>>, ApiError> {
    let id = parse_user_id(&id)?;
    let user = state.user_service.delete_user(id).await?;
    Ok(Json(ApiResponse::with_message(
        DeletedUserDto {
            deleted_user: UserDto::from(user),
        },
        format!("User with ID {} deleted successfully", id),
    )))
}

#[utoipa::path(
    post,
    path = "/reset",
    tag = "Development",
    responses(
        (status = 200, description = "Store reloaded with seed data", body = ApiResponse<ResetDto>)
    )
)]
pub async fn reset_users(State(state): State<UserHandlerState>) -> Json<ApiResponse<ResetDto>> {
    let total_users = state.user_service.reset().await;
    Json(ApiResponse::with_message(
        ResetDto { total_users },
        "Database reset successfully",
    ))
}
