//! Conversation Session.
//!
//! Orchestrates the advisor engine for one student: owns the append-only
//! message history and the turn-taking state, enforces the
//! at-most-one-in-flight rule, and models remote-call latency as a bounded
//! random delay. There is no queuing, no cancellation and no retry; a
//! started response computation always completes and is appended.

use async_trait::async_trait;
use rand::Rng;
use std::ops::Range;
use tokio::time::{sleep, Duration};
use tracing::{info, instrument, warn};

use crate::advisor::AdvisorEngine;
use crate::error::AppError;
use crate::models::{AuthContext, ChatMessage};

/// Substituted verbatim when response generation fails. The failure is
/// never surfaced to the presentation layer and never retried.
pub const APOLOGY: &str = "I apologize, but I'm having trouble processing your request right \
                           now. Please try again in a moment.";

/// Production latency window in milliseconds, standing in for a remote call.
pub const DEFAULT_LATENCY_MS: Range<u64> = 1000..3000;

/// Turn-taking state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Fresh session, nothing submitted yet.
    Idle,
    /// A response computation is outstanding; submissions are rejected.
    AwaitingResponse,
    /// The last turn completed; ready for the next submission.
    Ready,
}

/// Seam between the session and whatever produces bot replies. The advisor
/// engine is the production implementation; tests substitute failing mocks.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    async fn generate(&self, input: &str, auth: &AuthContext) -> Result<String, AppError>;
}

/// [`ResponseGenerator`] backed by the rule-based advisor engine. The
/// engine itself cannot fail; the fallible signature exists for the seam.
#[derive(Default)]
pub struct AdvisorGenerator {
    engine: AdvisorEngine,
}

impl AdvisorGenerator {
    pub fn new() -> Self {
        Self {
            engine: AdvisorEngine::new(),
        }
    }
}

#[async_trait]
impl ResponseGenerator for AdvisorGenerator {
    async fn generate(&self, input: &str, auth: &AuthContext) -> Result<String, AppError> {
        Ok(self.engine.respond(input, auth))
    }
}

/// One student's conversation with the advisor.
pub struct ChatSession<G: ResponseGenerator> {
    generator: G,
    auth: AuthContext,
    messages: Vec<ChatMessage>,
    state: SessionState,
    latency_ms: Range<u64>,
    pending: Option<String>,
}

impl<G: ResponseGenerator> ChatSession<G> {
    /// Opens a session seeded with a welcome message reflecting the auth
    /// context.
    pub fn new(generator: G, auth: AuthContext) -> Self {
        let welcome = ChatMessage::bot(welcome_text(&auth));
        info!(authenticated = auth.authenticated, "Chat session opened");
        Self {
            generator,
            auth,
            messages: vec![welcome],
            state: SessionState::Idle,
            latency_ms: DEFAULT_LATENCY_MS,
            pending: None,
        }
    }

    /// Overrides the simulated latency window. An empty range disables the
    /// delay entirely (used in tests).
    pub fn with_latency(mut self, latency_ms: Range<u64>) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Submits a user message. The trimmed text is appended to the history
    /// immediately and a response computation becomes pending. Returns
    /// `false` without any state change when the trimmed text is empty or
    /// a response is already outstanding.
    pub fn submit(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.state == SessionState::AwaitingResponse {
            return false;
        }
        self.messages.push(ChatMessage::user(trimmed));
        self.pending = Some(trimmed.to_string());
        self.state = SessionState::AwaitingResponse;
        true
    }

    /// Completes the pending turn: waits out the simulated latency, runs
    /// the generator, appends the bot message and returns to `Ready`. A
    /// generator failure is replaced by the fixed apology. Returns `None`
    /// when nothing is pending.
    #[instrument(skip(self))]
    pub async fn resolve(&mut self) -> Option<&ChatMessage> {
        let input = self.pending.take()?;
        if !self.latency_ms.is_empty() {
            let delay = rand::thread_rng().gen_range(self.latency_ms.clone());
            sleep(Duration::from_millis(delay)).await;
        }
        let text = match self.generator.generate(&input, &self.auth).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Response generation failed, substituting apology");
                APOLOGY.to_string()
            }
        };
        self.messages.push(ChatMessage::bot(text));
        self.state = SessionState::Ready;
        self.messages.last()
    }

    /// Resets the history to a single fresh greeting for the current auth
    /// context and returns to `Ready`.
    pub fn clear(&mut self) {
        self.pending = None;
        self.messages = vec![ChatMessage::bot(reset_text(&self.auth))];
        self.state = SessionState::Ready;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }
}

fn welcome_text(auth: &AuthContext) -> String {
    if auth.authenticated {
        format!(
            "Hi {}! 👋 I'm your EduPath AI assistant. I can help you with course \
             recommendations, college information, career guidance, and answer any questions \
             about your educational journey. How can I assist you today?",
            auth.name
        )
    } else {
        "Hi there! 👋 I'm your EduPath AI assistant. I can help you explore courses, colleges, \
         and career paths. For personalized recommendations, please log in to your account. \
         How can I help you today?"
            .to_string()
    }
}

fn reset_text(auth: &AuthContext) -> String {
    if auth.authenticated {
        format!("Hi {}! How can I help you today?", auth.name)
    } else {
        "Hi there! How can I assist you with your educational journey?".to_string()
    }
}
