use std::sync::Arc;

use crate::application::ports::{GenerativeModel, ImageCodec, SpeechRecognizer};
use crate::application::services::{ModelRouter, TranscriptionService};

pub struct AppState<G, R, C>
where
    G: GenerativeModel,
    R: SpeechRecognizer,
    C: ImageCodec,
{
    pub model_router: Arc<ModelRouter<G>>,
    pub transcription_service: Arc<TranscriptionService<R>>,
    pub image_codec: Arc<C>,
}

impl<G, R, C> Clone for AppState<G, R, C>
where
    G: GenerativeModel,
    R: SpeechRecognizer,
    C: ImageCodec,
{
    fn clone(&self) -> Self {
        Self {
            model_router: Arc::clone(&self.model_router),
            transcription_service: Arc::clone(&self.transcription_service),
            image_codec: Arc::clone(&self.image_codec),
        }
    }
}
