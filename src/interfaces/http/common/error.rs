//! Boundary error translation
//!
//! Services return typed [`DomainError`]s; this is the only place where an
//! error becomes a status code and an error envelope.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{debug, error};

use super::ApiResponse;
use crate::domain::DomainError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Missing, non-JSON or structurally unusable request body.
    #[error("{0}")]
    MalformedRequest(String),

    #[error("Endpoint not found")]
    RouteNotFound,

    #[error("Method not allowed for this endpoint")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            // Duplicate emails are reported as a bad request, not 409.
            Self::Domain(DomainError::Validation(_) | DomainError::Conflict(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "request failed");
        } else {
            debug!(status = status.as_u16(), error = %message, "request rejected");
        }

        (status, Json(ApiResponse::error(message))).into_response()
    }
}

/// Render a handler panic as a 500 error envelope.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected failure".to_string()
    };
    ApiError::Internal(detail).into_response()
}
