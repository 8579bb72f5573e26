mod chat;
mod health;
mod upload;
mod voice;

pub use chat::chat_handler;
pub use health::health_handler;
pub use upload::{DEFAULT_ANALYSIS_PROMPT, upload_handler};
pub use voice::voice_handler;
