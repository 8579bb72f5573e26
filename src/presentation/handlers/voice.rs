use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{GenerativeModel, ImageCodec, SpeechRecognizer};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct VoiceResponse {
    pub transcription: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /voice`. Multipart with a `file` audio field. A `prompt`
/// field is accepted for parity with the other endpoints but unused;
/// the endpoint returns the transcription only.
#[tracing::instrument(skip(state, multipart))]
pub async fn voice_handler<G, R, C>(
    State(state): State<AppState<G, R, C>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    G: GenerativeModel + 'static,
    R: SpeechRecognizer + 'static,
    C: ImageCodec + 'static,
{
    let mut audio_bytes: Option<Vec<u8>> = None;

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
        if name.as_deref() == Some("file") {
            match field.bytes().await {
                Ok(data) => audio_bytes = Some(data.to_vec()),
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
            }
        }
    }

    let Some(audio_bytes) = audio_bytes else {
        tracing::warn!("Voice request with no file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file uploaded".to_string(),
            }),
        )
            .into_response();
    };

    let transcription = state.transcription_service.transcribe(&audio_bytes).await;

    (StatusCode::OK, Json(VoiceResponse { transcription })).into_response()
}
