mod model_router;
mod transcription_service;

pub use model_router::{ModelRequest, ModelRouter, PERSONA_PREAMBLE, SYSTEM_ERROR_PREFIX};
pub use transcription_service::{TranscriptionService, UNKNOWN_AUDIO_MESSAGE};
