use std::any::Any;

use axum::Router;
use axum::http::{Response, StatusCode, header};
use axum::middleware;
use axum::routing::{get, post};
use bytes::Bytes;
use http_body_util::Full;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{GenerativeModel, ImageCodec, SpeechRecognizer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::auth::{SharedSecret, require_api_key};
use crate::presentation::handlers::{chat_handler, health_handler, upload_handler, voice_handler};
use crate::presentation::state::AppState;

pub fn create_router<G, R, C>(state: AppState<G, R, C>, shared_secret: SharedSecret) -> Router
where
    G: GenerativeModel + 'static,
    R: SpeechRecognizer + 'static,
    C: ImageCodec + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Every route except /health sits behind the shared-secret check.
    let protected = Router::new()
        .route("/chat", post(chat_handler::<G, R, C>))
        .route("/upload", post(upload_handler::<G, R, C>))
        .route("/voice", post(voice_handler::<G, R, C>))
        .route_layer(middleware::from_fn_with_state(
            shared_secret,
            require_api_key,
        ));

    Router::new()
        .route("/health", get(health_handler))
        .merge(protected)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

/// Fixed 500 body; no internal detail leaks past this point.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Full<Bytes>> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "Request handler panicked");

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from_static(
            br#"{"error":"Internal server error"}"#,
        )))
        .unwrap_or_else(|_| {
            Response::new(Full::new(Bytes::from_static(
                br#"{"error":"Internal server error"}"#,
            )))
        })
}
