use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use nerva::application::ports::{RecognitionError, SpeechRecognizer};
use nerva::infrastructure::audio::GoogleSpeechRecognizer;

type CapturedBody = Arc<Mutex<Option<serde_json::Value>>>;

async fn start_mock_speech_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, CapturedBody, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured: CapturedBody = Arc::new(Mutex::new(None));

    let handler_captured = Arc::clone(&captured);
    let app = Router::new()
        .route(
            "/v1/speech:recognize",
            post(
                move |State(captured): State<CapturedBody>, Json(body): Json<serde_json::Value>| async move {
                    *captured.lock().unwrap() = Some(body);
                    let status = axum::http::StatusCode::from_u16(response_status).unwrap();
                    (status, response_body).into_response()
                },
            ),
        )
        .with_state(handler_captured);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, captured, shutdown_tx)
}

fn recognizer_for(base_url: &str) -> GoogleSpeechRecognizer {
    GoogleSpeechRecognizer::new(
        "test-key".to_string(),
        Some(base_url.to_string()),
        Some("en-US".to_string()),
    )
}

/// Writes a short 16 kHz mono 16-bit WAV file and returns its handle.
fn wav_fixture() -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(file.path(), spec).unwrap();
    for i in 0..160 {
        writer.write_sample((i * 100) as i16).unwrap();
    }
    writer.finalize().unwrap();
    file
}

#[tokio::test]
async fn given_recognized_speech_when_recognizing_then_returns_transcript() {
    let body = r#"{"results":[{"alternatives":[{"transcript":"hello world"}]}]}"#;
    let (base_url, captured, shutdown_tx) = start_mock_speech_server(200, body).await;
    let wav = wav_fixture();

    let recognizer = recognizer_for(&base_url);
    let result = recognizer.recognize(wav.path()).await;

    assert_eq!(result.unwrap(), "hello world");

    let request = captured.lock().unwrap().clone().unwrap();
    assert_eq!(request["config"]["encoding"], "LINEAR16");
    assert_eq!(request["config"]["sampleRateHertz"], 16_000);
    assert_eq!(request["config"]["audioChannelCount"], 1);
    assert_eq!(request["config"]["languageCode"], "en-US");
    assert!(!request["audio"]["content"].as_str().unwrap().is_empty());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_multiple_results_when_recognizing_then_joins_top_alternatives() {
    let body = r#"{"results":[{"alternatives":[{"transcript":"hello"}]},{"alternatives":[{"transcript":"world"}]}]}"#;
    let (base_url, _captured, shutdown_tx) = start_mock_speech_server(200, body).await;
    let wav = wav_fixture();

    let recognizer = recognizer_for(&base_url);
    let result = recognizer.recognize(wav.path()).await;

    assert_eq!(result.unwrap(), "hello world");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_results_when_recognizing_then_returns_unknown_audio() {
    let (base_url, _captured, shutdown_tx) = start_mock_speech_server(200, "{}").await;
    let wav = wav_fixture();

    let recognizer = recognizer_for(&base_url);
    let result = recognizer.recognize(wav.path()).await;

    assert!(matches!(result, Err(RecognitionError::UnknownAudio)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_recognizing_then_returns_service_error() {
    let body = r#"{"error":{"code":400,"message":"bad request"}}"#;
    let (base_url, _captured, shutdown_tx) = start_mock_speech_server(400, body).await;
    let wav = wav_fixture();

    let recognizer = recognizer_for(&base_url);
    let result = recognizer.recognize(wav.path()).await;

    match result {
        Err(RecognitionError::Service(detail)) => assert!(detail.contains("400")),
        other => panic!("expected Service error, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_malformed_wav_when_recognizing_then_returns_other_error() {
    let (base_url, _captured, shutdown_tx) = start_mock_speech_server(200, "{}").await;
    let file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
    std::fs::write(file.path(), b"not a wav file").unwrap();

    let recognizer = recognizer_for(&base_url);
    let result = recognizer.recognize(file.path()).await;

    assert!(matches!(result, Err(RecognitionError::Other(_))));
    shutdown_tx.send(()).ok();
}
