//! End-to-end tests driving the full router in-process.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

use user_store::application::{ListLimits, UserService};
use user_store::create_api_router;
use user_store::infrastructure::InMemoryUserRepository;
use user_store::interfaces::http::common::panic_response;

fn app_with(repo: InMemoryUserRepository) -> Router {
    let service = Arc::new(UserService::new(Arc::new(repo), ListLimits::default()));
    let prometheus = PrometheusBuilder::new().build_recorder().handle();
    create_api_router(service, prometheus)
}

fn seeded_app() -> Router {
    app_with(InMemoryUserRepository::with_seed_data())
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_req(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete_req(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn user_lifecycle() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        json_req(
            "POST",
            "/users",
            json!({"name": "Ann Lee", "email": "ann@example.com", "age": 41}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["error"], false);
    assert_eq!(body["data"]["id"], 4);
    assert_eq!(body["data"]["department"], "");
    assert_eq!(body["data"]["created_at"], body["data"]["updated_at"]);
    assert_eq!(body["message"], "User created successfully with ID 4");

    let (status, body) = send(&app, get_req("/users/4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "ann@example.com");

    let (status, body) = send(
        &app,
        json_req("PUT", "/users/4", json!({"department": "Research", "age": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["department"], "Research");
    assert_eq!(body["data"]["age"], 42);
    assert_eq!(body["data"]["name"], "Ann Lee");
    assert_eq!(body["message"], "User with ID 4 updated successfully");

    let (status, body) = send(&app, delete_req("/users/4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleted_user"]["id"], 4);
    assert_eq!(body["message"], "User with ID 4 deleted successfully");

    let (status, body) = send(&app, get_req("/users/4")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "User with ID 4 not found");

    // Deleted ids are never handed out again.
    let (_, body) = send(
        &app,
        json_req(
            "POST",
            "/users",
            json!({"name": "Bo", "email": "bo@example.com", "age": 0}),
        ),
    )
    .await;
    assert_eq!(body["data"]["id"], 5);
}

#[tokio::test]
async fn list_slices_requested_page() {
    let app = seeded_app();

    let (status, body) = send(&app, get_req("/users?page=2&per_page=2")).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["total"], 3);
    assert_eq!(data["page"], 2);
    assert_eq!(data["per_page"], 2);
    assert_eq!(data["pages"], 2);
    let users = data["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], 3);
}

#[tokio::test]
async fn list_clamps_and_tolerates_bad_query_values() {
    let app = seeded_app();

    let (_, body) = send(&app, get_req("/users?page=0&per_page=1000")).await;
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["per_page"], 100);
    assert_eq!(body["data"]["users"].as_array().unwrap().len(), 3);

    let (status, body) = send(&app, get_req("/users?page=abc&per_page=")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["per_page"], 10);
}

#[tokio::test]
async fn empty_store_lists_no_users() {
    let app = app_with(InMemoryUserRepository::new());

    let (status, body) = send(&app, get_req("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["pages"], 0);
    assert_eq!(body["message"], "No users found");
}

#[tokio::test]
async fn create_reports_every_violation() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        json_req(
            "POST",
            "/users",
            json!({"name": "", "email": "nope", "age": -3}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Validation errors: 'name' must be a non-empty string; \
         Invalid email format; Age must be a non-negative integer"
    );
}

#[tokio::test]
async fn create_reports_missing_fields() {
    let app = seeded_app();

    let (status, body) = send(&app, json_req("POST", "/users", json!({"department": "Ops"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("'name' is required"));
    assert!(message.contains("'email' is required"));
    assert!(message.contains("'age' is required"));
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        json_req(
            "POST",
            "/users",
            json!({"name": "Other John", "email": "john.doe@example.com", "age": 50}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User with this email already exists");

    let (status, _) = send(
        &app,
        json_req("PUT", "/users/2", json!({"email": "john.doe@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Re-submitting a record's own email is not a conflict.
    let (status, _) = send(
        &app,
        json_req("PUT", "/users/1", json!({"email": "john.doe@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_bodies_are_rejected() {
    let app = seeded_app();

    let no_content_type = Request::builder()
        .method("POST")
        .uri("/users")
        .body(Body::from(r#"{"name":"x"}"#))
        .unwrap();
    let (status, body) = send(&app, no_content_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Request must contain JSON data");

    let broken = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, broken).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON"));

    let (status, body) = send(&app, json_req("POST", "/users", json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Request body must be a JSON object");

    let (status, body) = send(&app, json_req("PUT", "/users/1", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Request body is empty");
}

#[tokio::test]
async fn unknown_routes_and_ids() {
    let app = seeded_app();

    let (status, body) = send(&app, get_req("/nowhere")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Endpoint not found");

    let (status, body) = send(&app, get_req("/users/abc")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Endpoint not found");

    let (status, body) = send(&app, delete_req("/users/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User with ID 999 not found");
}

#[tokio::test]
async fn update_of_unknown_id_is_404_whatever_the_body() {
    let app = seeded_app();

    let plain = Request::builder()
        .method("PUT")
        .uri("/users/999")
        .body(Body::from("plain"))
        .unwrap();
    let (status, body) = send(&app, plain).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User with ID 999 not found");

    let (status, body) = send(&app, json_req("PUT", "/users/999", json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User with ID 999 not found");
}

#[tokio::test]
async fn signed_ids_do_not_match_a_route() {
    let app = seeded_app();

    let (status, body) = send(&app, get_req("/users/+1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Endpoint not found");
}

#[tokio::test]
async fn large_ages_are_accepted() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        json_req(
            "POST",
            "/users",
            json!({"name": "A", "email": "a@b.com", "age": 5_000_000_000u64}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["age"], 5_000_000_000u64);
}

#[tokio::test]
async fn wrong_method_is_405() {
    let app = seeded_app();

    let (status, body) = send(&app, delete_req("/users")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "Method not allowed for this endpoint");
}

#[tokio::test]
async fn reset_restores_seed_users() {
    let app = seeded_app();

    send(&app, delete_req("/users/1")).await;
    send(&app, delete_req("/users/2")).await;

    let reset = Request::builder()
        .method("POST")
        .uri("/reset")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, reset).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_users"], 3);
    assert_eq!(body["message"], "Database reset successfully");

    let (_, body) = send(&app, get_req("/users")).await;
    let ids: Vec<u64> = body["data"]["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn info_and_health_report_user_count() {
    let app = seeded_app();

    let (status, body) = send(&app, get_req("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_users"], 3);
    assert!(!body["data"]["endpoints"].as_array().unwrap().is_empty());

    let (status, body) = send(&app, get_req("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["total_users"], 3);
}

#[tokio::test]
async fn request_id_is_generated_or_echoed() {
    let app = seeded_app();

    let resp = app.clone().oneshot(get_req("/health")).await.unwrap();
    let generated = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(generated.len(), 36);

    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-123")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "trace-123"
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = seeded_app();

    let (status, body) = send(&app, get_req("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/users/{id}").is_some());
}

#[tokio::test]
async fn handler_panic_becomes_error_envelope() {
    async fn explode() -> &'static str {
        panic!("boom")
    }
    let app = Router::new()
        .route("/explode", get(explode))
        .layer(CatchPanicLayer::custom(panic_response));

    let (status, body) = send(&app, get_req("/explode")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], true);
    assert!(body["message"].as_str().unwrap().contains("boom"));
}
