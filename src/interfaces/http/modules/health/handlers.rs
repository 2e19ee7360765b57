//! Service info and health check handlers

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::application::UserService;
use crate::infrastructure::InMemoryUserRepository;
use crate::interfaces::http::common::ApiResponse;

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Routes advertised by `GET /`, in display order.
const ENDPOINTS: [(&str, &str); 8] = [
    ("GET /", "API information"),
    ("GET /health", "API health check"),
    ("GET /users", "Get all users (?page=&per_page=)"),
    ("GET /users/{id}", "Get user by ID"),
    ("POST /users", "Create new user"),
    ("PUT /users/{id}", "Update user by ID"),
    ("DELETE /users/{id}", "Delete user by ID"),
    ("POST /reset", "Reload sample data (development only)"),
];

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    pub started_at: Instant,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointInfo {
    pub route: String,
    pub description: String,
}

/// Service information
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub welcome: String,
    pub version: String,
    pub endpoints: Vec<EndpointInfo>,
    #[schema(value_type = Object)]
    pub sample_request: Value,
    pub total_users: usize,
}

/// Service health response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub api_version: String,
    pub total_users: usize,
    pub uptime_seconds: u64,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service information", body = ApiResponse<ServiceInfo>)
    )
)]
pub async fn service_info(State(state): State<HealthState>) -> Json<ApiResponse<ServiceInfo>> {
    let endpoints = ENDPOINTS
        .iter()
        .map(|(route, description)| EndpointInfo {
            route: route.to_string(),
            description: description.to_string(),
        })
        .collect();

    Json(ApiResponse::success(ServiceInfo {
        welcome: "User Management REST API".to_string(),
        version: API_VERSION.to_string(),
        endpoints,
        sample_request: json!({
            "POST /users": {
                "name": "John Doe",
                "email": "john@example.com",
                "age": 30,
                "department": "Engineering"
            }
        }),
        total_users: state.user_service.count_users().await,
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = ApiResponse<HealthResponse>)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        api_version: API_VERSION.to_string(),
        total_users: state.user_service.count_users().await,
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}
