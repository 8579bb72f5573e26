use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use subtle::ConstantTimeEq;

pub const API_KEY_HEADER: &str = "x-api-key";

/// The configured shared secret, cloned into the auth middleware.
#[derive(Clone)]
pub struct SharedSecret(Arc<str>);

impl SharedSecret {
    pub fn new(secret: &str) -> Self {
        Self(Arc::from(secret))
    }
}

/// Rejects the request before any core code runs unless the caller
/// presents the shared secret. Comparison is constant-time.
pub async fn require_api_key(
    State(secret): State<SharedSecret>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let matches: bool = presented
        .as_bytes()
        .ct_eq(secret.0.as_bytes())
        .into();

    if !matches {
        tracing::warn!("Rejected request with missing or invalid API key");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid API key" })),
        )
            .into_response();
    }

    next.run(request).await
}
