//! JSON object extractor for Axum
//!
//! `JsonObject<T>` works like `axum::Json<T>`, but only accepts a non-empty
//! JSON object and reports every rejection through the error envelope
//! (status 400) instead of axum's plain-text bodies. It runs before any
//! field validation.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;

/// An extractor that requires a non-empty JSON object body.
///
/// ```ignore
/// async fn handler(JsonObject(body): JsonObject<UserFields>) {
///     // `body` came from a `{...}` with at least one key
/// }
/// ```
pub struct JsonObject<T>(pub T);

fn reject(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::MalformedRequest("Request must contain JSON data".into())
        }
        other => ApiError::MalformedRequest(format!("Invalid JSON: {}", other.body_text())),
    }
}

impl<S, T> FromRequest<S> for JsonObject<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(reject)?;

        let Value::Object(map) = value else {
            return Err(ApiError::MalformedRequest(
                "Request body must be a JSON object".into(),
            ));
        };
        if map.is_empty() {
            return Err(ApiError::MalformedRequest("Request body is empty".into()));
        }

        serde_json::from_value(Value::Object(map))
            .map(JsonObject)
            .map_err(|e| ApiError::MalformedRequest(format!("Invalid JSON: {}", e)))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct TestBody {
        #[allow(dead_code)]
        name: Option<String>,
    }

    async fn handler(JsonObject(_body): JsonObject<TestBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(content_type: Option<&str>, body: &'static str) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("POST").uri("/test");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        let resp = app()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn object_body_is_accepted() {
        let (status, _) = send(Some("application/json"), r#"{"name":"A"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_content_type_is_rejected() {
        let (status, body) = send(None, r#"{"name":"A"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Request must contain JSON data");
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn invalid_json_is_rejected() {
        let (status, body) = send(Some("application/json"), "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn empty_object_is_rejected() {
        let (status, body) = send(Some("application/json"), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Request body is empty");
    }

    #[tokio::test]
    async fn non_object_is_rejected() {
        let (status, body) = send(Some("application/json"), "[1, 2]").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Request body must be a JSON object");
    }
}
