use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerativeModel, ImageCodec, SpeechRecognizer};
use crate::application::services::ModelRequest;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// `POST /chat`. Empty prompts are permitted; the router accepts them.
#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<G, R, C>(
    State(state): State<AppState<G, R, C>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse
where
    G: GenerativeModel + 'static,
    R: SpeechRecognizer + 'static,
    C: ImageCodec + 'static,
{
    tracing::debug!(prompt = %sanitize_prompt(&request.prompt), "Processing chat request");

    let response = state
        .model_router
        .generate(ModelRequest::Text {
            prompt: request.prompt,
        })
        .await;

    (StatusCode::OK, Json(ChatResponse { response }))
}
