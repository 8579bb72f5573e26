use std::path::Path;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hound::SampleFormat;
use serde::{Deserialize, Serialize};

use crate::application::ports::{RecognitionError, SpeechRecognizer};

/// Google Cloud Speech-to-Text over LINEAR16 PCM. The WAV file is read
/// in full and submitted as inline base64 content.
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    language_code: String,
}

impl GoogleSpeechRecognizer {
    pub fn new(api_key: String, base_url: Option<String>, language_code: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://speech.googleapis.com".to_string()),
            language_code: language_code.unwrap_or_else(|| "en-US".to_string()),
        }
    }

    fn read_wav(path: &Path) -> Result<WavPayload, RecognitionError> {
        let mut reader = hound::WavReader::open(path)
            .map_err(|e| RecognitionError::Other(format!("open wav: {}", e)))?;
        let spec = reader.spec();

        if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
            return Err(RecognitionError::Other(format!(
                "unsupported wav encoding: {:?} {} bits",
                spec.sample_format, spec.bits_per_sample
            )));
        }

        let mut pcm = Vec::new();
        for sample in reader.samples::<i16>() {
            let sample = sample.map_err(|e| RecognitionError::Other(format!("read wav: {}", e)))?;
            pcm.extend_from_slice(&sample.to_le_bytes());
        }

        Ok(WavPayload {
            pcm,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
        })
    }
}

struct WavPayload {
    pcm: Vec<u8>,
    sample_rate: u32,
    channels: u16,
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn recognize(&self, audio_path: &Path) -> Result<String, RecognitionError> {
        let payload = Self::read_wav(audio_path)?;

        let url = format!("{}/v1/speech:recognize?key={}", self.base_url, self.api_key);
        let body = RecognizeRequest {
            config: RecognitionConfig {
                encoding: "LINEAR16",
                sample_rate_hertz: payload.sample_rate,
                audio_channel_count: payload.channels,
                language_code: &self.language_code,
            },
            audio: RecognitionAudio {
                content: BASE64.encode(&payload.pcm),
            },
        };

        tracing::debug!(
            sample_rate = payload.sample_rate,
            channels = payload.channels,
            pcm_bytes = payload.pcm.len(),
            "Sending audio to Google Speech-to-Text"
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RecognitionError::Service(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognitionError::Service(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| RecognitionError::Service(format!("parse response: {}", e)))?;

        let transcript: String = result
            .results
            .iter()
            .filter_map(|r| r.alternatives.first())
            .map(|a| a.transcript.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        if transcript.is_empty() {
            return Err(RecognitionError::UnknownAudio);
        }

        tracing::info!(chars = transcript.len(), "Speech recognition completed");

        Ok(transcript)
    }
}

#[derive(Serialize)]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    encoding: &'static str,
    sample_rate_hertz: u32,
    audio_channel_count: u16,
    language_code: &'a str,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<SpeechResult>,
}

#[derive(Deserialize)]
struct SpeechResult {
    #[serde(default)]
    alternatives: Vec<SpeechAlternative>,
}

#[derive(Deserialize)]
struct SpeechAlternative {
    transcript: String,
}
