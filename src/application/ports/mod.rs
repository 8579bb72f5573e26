mod generative_model;
mod image_codec;
mod speech_recognizer;

pub use generative_model::{GenerativeModel, ModelError};
pub use image_codec::{ImageCodec, ImageDecodeError};
pub use speech_recognizer::{RecognitionError, SpeechRecognizer};
