use std::sync::Arc;

use crate::application::ports::GenerativeModel;
use crate::domain::DecodedImage;

/// Persona preamble prepended to every caller prompt, identical for
/// both models.
pub const PERSONA_PREAMBLE: &str = "You are NERVA (Neural Engine for Reasoning, Vision, and \
     Audio), an AI assistant inspired by JARVIS from Iron Man. Respond in a helpful, \
     intelligent, and slightly sophisticated manner. User query: ";

/// Prefix of the string every model failure is normalized to.
pub const SYSTEM_ERROR_PREFIX: &str = "NERVA systems error: ";

/// One request through the router. The variant fixes the model: `Text`
/// always invokes the text model, `Vision` always the vision model.
/// There is no mixed or fallback mode.
#[derive(Debug)]
pub enum ModelRequest {
    Text { prompt: String },
    Vision { prompt: String, image: DecodedImage },
}

/// The multi-modal request router. `generate` is total: every outcome,
/// success or failure, comes back as a displayable string, so both
/// presentation surfaces can render every call without error handling
/// of their own.
pub struct ModelRouter<G>
where
    G: GenerativeModel,
{
    model: Arc<G>,
}

impl<G> ModelRouter<G>
where
    G: GenerativeModel,
{
    pub fn new(model: Arc<G>) -> Self {
        Self { model }
    }

    /// Exactly one remote attempt per invocation; no retry, no added
    /// timeout beyond the HTTP client default.
    pub async fn generate(&self, request: ModelRequest) -> String {
        let result = match request {
            ModelRequest::Text { prompt } => {
                tracing::debug!(prompt_chars = prompt.len(), "Routing to text model");
                let decorated = format!("{}{}", PERSONA_PREAMBLE, prompt);
                self.model.generate_text(&decorated).await
            }
            ModelRequest::Vision { prompt, image } => {
                tracing::debug!(
                    prompt_chars = prompt.len(),
                    width = image.width(),
                    height = image.height(),
                    "Routing to vision model"
                );
                let decorated = format!("{}{}", PERSONA_PREAMBLE, prompt);
                self.model.generate_vision(&decorated, &image).await
            }
        };

        match result {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Model invocation failed");
                format!("{}{}", SYSTEM_ERROR_PREFIX, e)
            }
        }
    }
}
