mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{GeminiSettings, ServerSettings, Settings, SettingsError, SpeechSettings};
