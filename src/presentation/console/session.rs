use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::application::ports::{GenerativeModel, ImageCodec, SpeechRecognizer};
use crate::application::services::{ModelRequest, ModelRouter, TranscriptionService};
use crate::domain::{Conversation, InputOrigin, Message, MessageRole};
use crate::presentation::handlers::DEFAULT_ANALYSIS_PROMPT;

const HELP: &str = "\
Commands:
  :image <path> [prompt]  analyze an image file
  :voice <path>           transcribe an audio file and send the transcript
  :history                print the conversation so far
  :clear                  forget the conversation
  :help                   show this help
  :quit                   exit";

/// Interactive terminal surface. Owns the conversation history; the
/// router and adapters stay stateless.
pub struct ChatSession<G, R, C>
where
    G: GenerativeModel,
    R: SpeechRecognizer,
    C: ImageCodec,
{
    model_router: Arc<ModelRouter<G>>,
    transcription_service: Arc<TranscriptionService<R>>,
    image_codec: Arc<C>,
    conversation: Conversation,
}

impl<G, R, C> ChatSession<G, R, C>
where
    G: GenerativeModel,
    R: SpeechRecognizer,
    C: ImageCodec,
{
    pub fn new(
        model_router: Arc<ModelRouter<G>>,
        transcription_service: Arc<TranscriptionService<R>>,
        image_codec: Arc<C>,
    ) -> Self {
        Self {
            model_router,
            transcription_service,
            image_codec,
            conversation: Conversation::new(Some("Console session".to_string())),
        }
    }

    pub async fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        println!("NERVA console. Type :help for commands, :quit to exit.");

        loop {
            write!(stdout, "you> ")?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            match line.split_once(' ').map_or((line, ""), |(c, rest)| (c, rest.trim())) {
                (":quit", _) | (":exit", _) => break,
                (":help", _) => println!("{}", HELP),
                (":history", _) => self.print_history(),
                (":clear", _) => {
                    self.conversation.clear();
                    println!("Conversation cleared.");
                }
                (":image", args) => self.handle_image(args).await,
                (":voice", args) => self.handle_voice(args).await,
                _ => self.handle_text(line.to_string()).await,
            }
        }

        Ok(())
    }

    async fn handle_text(&mut self, prompt: String) {
        self.record(MessageRole::User, InputOrigin::Text, prompt.clone());

        let response = self
            .model_router
            .generate(ModelRequest::Text { prompt })
            .await;

        println!("nerva> {}", response);
        self.record(MessageRole::Assistant, InputOrigin::Text, response);
    }

    async fn handle_image(&mut self, args: &str) {
        let (path, prompt) = match args.split_once(' ') {
            Some((p, rest)) => (p, rest.trim().to_string()),
            None if !args.is_empty() => (args, DEFAULT_ANALYSIS_PROMPT.to_string()),
            None => {
                println!("Usage: :image <path> [prompt]");
                return;
            }
        };

        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                println!("Could not read {}: {}", path, e);
                return;
            }
        };

        let image = match self.image_codec.decode(&bytes) {
            Ok(img) => img,
            Err(e) => {
                println!("Could not decode {}: {}", path, e);
                return;
            }
        };

        self.record(MessageRole::User, InputOrigin::Vision, prompt.clone());

        let response = self
            .model_router
            .generate(ModelRequest::Vision { prompt, image })
            .await;

        println!("nerva> {}", response);
        self.record(MessageRole::Assistant, InputOrigin::Vision, response);
    }

    async fn handle_voice(&mut self, args: &str) {
        if args.is_empty() {
            println!("Usage: :voice <path>");
            return;
        }

        let bytes = match std::fs::read(args) {
            Ok(b) => b,
            Err(e) => {
                println!("Could not read {}: {}", args, e);
                return;
            }
        };

        let transcript = self.transcription_service.transcribe(&bytes).await;
        println!("heard> {}", transcript);

        // The transcript re-enters the router as ordinary text.
        self.record(MessageRole::User, InputOrigin::Voice, transcript.clone());

        let response = self
            .model_router
            .generate(ModelRequest::Text { prompt: transcript })
            .await;

        println!("nerva> {}", response);
        self.record(MessageRole::Assistant, InputOrigin::Voice, response);
    }

    fn print_history(&self) {
        if self.conversation.messages.is_empty() {
            println!("No messages yet.");
            return;
        }
        for message in &self.conversation.messages {
            println!(
                "[{}] {} ({}): {}",
                message.created_at.format("%H:%M:%S"),
                message.role,
                message.origin,
                message.content
            );
        }
    }

    fn record(&mut self, role: MessageRole, origin: InputOrigin, content: String) {
        let message = Message::new(self.conversation.id, role, origin, content);
        self.conversation.push(message);
    }
}
