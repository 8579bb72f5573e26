/// Runtime settings, sourced from environment variables (a `.env` file
/// is loaded at startup). Remote base URLs are overridable so tests can
/// point the clients at a local mock server.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub speech: SpeechSettings,
    /// Static shared secret for the HTTP surface (`NERVA_API_KEY`).
    /// Required by `serve`, unused by the console surface.
    pub shared_secret: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub text_model: Option<String>,
    pub vision_model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub language_code: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable: {0}")]
    MissingVariable(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let google_api_key = std::env::var("GOOGLE_API_KEY")
            .map_err(|_| SettingsError::MissingVariable("GOOGLE_API_KEY"))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| SettingsError::InvalidValue {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => 3000,
        };

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            gemini: GeminiSettings {
                api_key: google_api_key.clone(),
                base_url: std::env::var("GEMINI_BASE_URL").ok(),
                text_model: std::env::var("NERVA_TEXT_MODEL").ok(),
                vision_model: std::env::var("NERVA_VISION_MODEL").ok(),
            },
            speech: SpeechSettings {
                api_key: google_api_key,
                base_url: std::env::var("SPEECH_BASE_URL").ok(),
                language_code: std::env::var("SPEECH_LANGUAGE").ok(),
            },
            shared_secret: std::env::var("NERVA_API_KEY").ok(),
        })
    }
}
