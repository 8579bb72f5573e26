mod google_speech_recognizer;

pub use google_speech_recognizer::GoogleSpeechRecognizer;
