use std::path::Path;

use async_trait::async_trait;

/// Cloud speech-to-text over a filesystem-backed audio source.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, audio_path: &Path) -> Result<String, RecognitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("no intelligible speech in audio")]
    UnknownAudio,
    #[error("recognition service failed: {0}")]
    Service(String),
    #[error("audio processing failed: {0}")]
    Other(String),
}
