use std::sync::Arc;

use crate::application::ports::{RecognitionError, SpeechRecognizer};

pub const UNKNOWN_AUDIO_MESSAGE: &str = "Sorry, I couldn't understand the audio.";

/// The audio transcription adapter. The recognizer port consumes a
/// filesystem-backed audio source, so the raw bytes are staged in a
/// scoped temporary file that is removed on every exit path.
pub struct TranscriptionService<R>
where
    R: SpeechRecognizer,
{
    recognizer: Arc<R>,
}

impl<R> TranscriptionService<R>
where
    R: SpeechRecognizer,
{
    pub fn new(recognizer: Arc<R>) -> Self {
        Self { recognizer }
    }

    /// Total function: always a displayable string, never an error.
    pub async fn transcribe(&self, audio_bytes: &[u8]) -> String {
        let temp_file = match tempfile::Builder::new().suffix(".wav").tempfile() {
            Ok(f) => f,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create temporary audio file");
                return format!("Audio processing error: {}", e);
            }
        };

        if let Err(e) = tokio::fs::write(temp_file.path(), audio_bytes).await {
            tracing::error!(error = %e, "Failed to stage audio bytes");
            return format!("Audio processing error: {}", e);
        }

        tracing::debug!(bytes = audio_bytes.len(), "Submitting audio for recognition");

        // temp_file is dropped (and the file unlinked) on every return
        // path below, including recognizer failure.
        match self.recognizer.recognize(temp_file.path()).await {
            Ok(transcript) => {
                tracing::info!(chars = transcript.len(), "Transcription completed");
                transcript
            }
            Err(RecognitionError::UnknownAudio) => {
                tracing::warn!("Recognizer found no intelligible speech");
                UNKNOWN_AUDIO_MESSAGE.to_string()
            }
            Err(RecognitionError::Service(detail)) => {
                tracing::error!(error = %detail, "Speech recognition service failed");
                format!("Speech recognition service error: {}", detail)
            }
            Err(RecognitionError::Other(detail)) => {
                tracing::error!(error = %detail, "Audio processing failed");
                format!("Audio processing error: {}", detail)
            }
        }
    }
}
