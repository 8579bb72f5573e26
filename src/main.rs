use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use nerva::application::services::{ModelRouter, TranscriptionService};
use nerva::infrastructure::audio::GoogleSpeechRecognizer;
use nerva::infrastructure::image::RasterCodec;
use nerva::infrastructure::llm::GeminiClient;
use nerva::infrastructure::observability::{TracingConfig, init_tracing};
use nerva::presentation::auth::SharedSecret;
use nerva::presentation::console::ChatSession;
use nerva::presentation::{AppState, Environment, Settings, create_router};

#[derive(Parser)]
#[command(name = "nerva", about = "Multi-modal conversational assistant")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API surface.
    Serve,
    /// Run an interactive console chat session.
    Chat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::from_env().context("loading settings")?;

    let environment: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)
        .context("parsing APP_ENV")?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let model = Arc::new(GeminiClient::new(
        settings.gemini.api_key.clone(),
        settings.gemini.base_url.clone(),
        settings.gemini.text_model.clone(),
        settings.gemini.vision_model.clone(),
    ));
    let recognizer = Arc::new(GoogleSpeechRecognizer::new(
        settings.speech.api_key.clone(),
        settings.speech.base_url.clone(),
        settings.speech.language_code.clone(),
    ));

    let model_router = Arc::new(ModelRouter::new(model));
    let transcription_service = Arc::new(TranscriptionService::new(recognizer));
    let image_codec = Arc::new(RasterCodec);

    match cli.command {
        Command::Serve => {
            let secret = settings
                .shared_secret
                .as_deref()
                .context("NERVA_API_KEY must be set to serve the HTTP API")?;

            let state = AppState {
                model_router,
                transcription_service,
                image_codec,
            };
            let router = create_router(state, SharedSecret::new(secret));

            let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
                .parse()
                .context("parsing listen address")?;
            tracing::info!("Listening on {}", addr);

            let listener = TcpListener::bind(addr).await?;
            axum::serve(listener, router).await?;
        }
        Command::Chat => {
            let mut session = ChatSession::new(model_router, transcription_service, image_codec);
            session.run().await?;
        }
    }

    Ok(())
}
