//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{panic_response, ApiError};
use super::modules::health::{self, HealthState};
use super::modules::metrics::{self, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::users::{self, UserHandlerState};
use crate::application::UserService;
use crate::domain::UserFields;
use crate::infrastructure::InMemoryUserRepository;

/// Unified router state. Each handler extracts its own slice via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    pub prometheus: PrometheusHandle,
    pub started_at: Instant,
}

impl FromRef<AppState> for UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        UserHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        HealthState {
            user_service: Arc::clone(&s.user_service),
            started_at: s.started_at,
        }
    }
}

impl FromRef<AppState> for MetricsState {
    fn from_ref(s: &AppState) -> Self {
        MetricsState {
            handle: s.prometheus.clone(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::service_info,
        health::health_check,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::reset_users,
    ),
    components(
        schemas(
            users::UserDto,
            UserFields,
            users::UserListDto,
            users::DeletedUserDto,
            users::ResetDto,
            health::ServiceInfo,
            health::EndpointInfo,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service information and health check"),
        (name = "Users", description = "In-memory user store CRUD"),
        (name = "Development", description = "Development utilities"),
    ),
    info(
        title = "User Management REST API",
        version = "1.0.0",
        description = "In-memory CRUD service for user records with JSON envelopes",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Create the API router with all routes
pub fn create_api_router(
    user_service: Arc<UserService<InMemoryUserRepository>>,
    prometheus: PrometheusHandle,
) -> Router {
    let state = AppState {
        user_service,
        prometheus,
        started_at: Instant::now(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/", get(health::service_info))
        .route("/health", get(health::health_check))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/reset", post(users::reset_users))
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
}
