use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{GenerativeModel, ImageCodec, SpeechRecognizer};
use crate::application::services::ModelRequest;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

/// Prompt used when the caller uploads an image without one.
pub const DEFAULT_ANALYSIS_PROMPT: &str = "Analyze this image in detail. What do you see?";

#[derive(Serialize)]
pub struct UploadResponse {
    pub response: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /upload`. Multipart with a `file` image field and an optional
/// `prompt` text field.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<G, R, C>(
    State(state): State<AppState<G, R, C>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    G: GenerativeModel + 'static,
    R: SpeechRecognizer + 'static,
    C: ImageCodec + 'static,
{
    let mut image_bytes: Option<Vec<u8>> = None;
    let mut prompt: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => match field.bytes().await {
                Ok(data) => image_bytes = Some(data.to_vec()),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read file field");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read file: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            Some("prompt") => {
                prompt = field.text().await.ok();
            }
            _ => {}
        }
    }

    let Some(image_bytes) = image_bytes else {
        tracing::warn!("Upload request with no file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file uploaded".to_string(),
            }),
        )
            .into_response();
    };

    let image = match state.image_codec.decode(&image_bytes) {
        Ok(img) => img,
        Err(e) => {
            tracing::warn!(error = %e, "Uploaded image failed to decode");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid image format or processing failed.".to_string(),
                }),
            )
                .into_response();
        }
    };

    let prompt = prompt
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_ANALYSIS_PROMPT.to_string());

    tracing::debug!(
        prompt = %sanitize_prompt(&prompt),
        width = image.width(),
        height = image.height(),
        "Processing image analysis request"
    );

    let response = state
        .model_router
        .generate(ModelRequest::Vision { prompt, image })
        .await;

    (StatusCode::OK, Json(UploadResponse { response })).into_response()
}
