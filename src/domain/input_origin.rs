use std::fmt;

/// How the user's turn entered the system: typed text, transcribed
/// voice, or an image analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputOrigin {
    Text,
    Voice,
    Vision,
}

impl InputOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputOrigin::Text => "TEXT",
            InputOrigin::Voice => "VOICE",
            InputOrigin::Vision => "VISION",
        }
    }
}

impl fmt::Display for InputOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
