//! Legal Q&A chat session
//!
//! An explicit `Idle -> AwaitingResponse -> Idle` state machine guards the
//! single-in-flight invariant; every exit path of a submission, success,
//! failure, or a dropped in-flight future, lands back in `Idle`. Generation
//! errors never escape `submit` — they become visible assistant turns.

use crate::events::{SessionEvent, SessionEventSender};
use crate::generation::TextGenerator;
use crate::LexiError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Instructional preamble wrapped around every user question
pub const LEGAL_ASSISTANT_PREAMBLE: &str = "You are a helpful legal assistant for Indian real \
     estate law. Answer the following question concisely and accurately:";

/// Assistant reply used when the model answers without usable text
pub const FALLBACK_REPLY: &str =
    "I couldn't generate a response. Please try rephrasing your question.";

/// Greeting seeded into a fresh conversation, dropped on the first real message
const WELCOME_MESSAGE: &str = "Hello! I'm your legal assistant. Ask me anything about Indian \
     real estate law, RERA, or your contract.";

/// Who authored a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The human asking questions
    User,
    /// The model (or an error surfaced in its voice)
    Assistant,
}

/// One entry in the append-only conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    /// Turn author
    pub role: ChatRole,
    /// Turn text
    pub text: String,
    /// When the turn was appended
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    fn now(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Conversation request state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    /// Ready to accept a submission
    Idle,
    /// A generation request is in flight; submissions are rejected
    AwaitingResponse,
}

/// What `submit` did with a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Message was sent and a reply (or error turn) appended
    Sent,
    /// Message trimmed to nothing; ignored
    EmptyMessage,
    /// A request was already in flight; ignored
    Busy,
}

struct Conversation {
    turns: Vec<ChatTurn>,
    state: ChatState,
    welcome_pending: bool,
}

/// A single legal Q&A conversation bound to a text-generation backend
pub struct ChatSession {
    generator: Arc<dyn TextGenerator>,
    // Never held across an await; guarded sections are short and synchronous
    conversation: Mutex<Conversation>,
    events: SessionEventSender,
}

/// Resets the session to `Idle` unless the submission ran to completion.
///
/// Covers the case where the `submit` future is dropped mid-request
/// (timeout, `select!`, task abort): without this, the session would report
/// `Busy` forever.
struct InFlightGuard<'a> {
    session: &'a ChatSession,
    completed: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        if let Ok(mut conversation) = self.session.conversation.lock() {
            conversation.state = ChatState::Idle;
            tracing::debug!("chat submission dropped mid-flight; session reset to idle");
        }
    }
}

impl ChatSession {
    /// Create a session seeded with the welcome turn
    pub fn new(generator: Arc<dyn TextGenerator>, events: SessionEventSender) -> Self {
        Self {
            generator,
            conversation: Mutex::new(Conversation {
                turns: vec![ChatTurn::now(ChatRole::Assistant, WELCOME_MESSAGE)],
                state: ChatState::Idle,
                welcome_pending: true,
            }),
            events,
        }
    }

    /// Submit a user message and wait for the reply turn.
    ///
    /// Empty/whitespace messages and submissions while a request is in
    /// flight are no-ops. Otherwise the user turn is appended, the backend
    /// is called with the legal-assistant preamble, and exactly one
    /// assistant turn is appended: the generated text, the fallback reply
    /// for an empty model response, or the error rendered behind a warning
    /// marker. The session is `Idle` again by the time this returns, and a
    /// drop guard restores `Idle` even when the future is cancelled
    /// mid-request.
    pub async fn submit(&self, message: &str) -> SubmitOutcome {
        let message = message.trim();
        if message.is_empty() {
            return SubmitOutcome::EmptyMessage;
        }

        {
            let mut conversation = self.lock_conversation();
            if conversation.state == ChatState::AwaitingResponse {
                tracing::debug!("chat submit ignored: request already in flight");
                return SubmitOutcome::Busy;
            }
            conversation.state = ChatState::AwaitingResponse;
            if conversation.welcome_pending {
                conversation.turns.remove(0);
                conversation.welcome_pending = false;
            }
            conversation.turns.push(ChatTurn::now(ChatRole::User, message));
        }
        let mut guard = InFlightGuard {
            session: self,
            completed: false,
        };
        let _ = self.events.send(SessionEvent::TurnAppended(ChatRole::User));

        let prompt = format!("{LEGAL_ASSISTANT_PREAMBLE} {message}");
        let reply = match self.generator.generate_text(&prompt).await {
            Ok(text) => text,
            Err(LexiError::EmptyResponse) => FALLBACK_REPLY.to_string(),
            Err(err) => {
                tracing::warn!(provider = self.generator.name(), error = %err, "generation failed");
                format!("⚠️ {err}")
            }
        };

        // Single funnel back to Idle for every success and failure path
        {
            let mut conversation = self.lock_conversation();
            conversation.turns.push(ChatTurn::now(ChatRole::Assistant, reply));
            conversation.state = ChatState::Idle;
        }
        guard.completed = true;
        let _ = self
            .events
            .send(SessionEvent::TurnAppended(ChatRole::Assistant));

        SubmitOutcome::Sent
    }

    /// Snapshot of the conversation, oldest first
    pub fn turns(&self) -> Vec<ChatTurn> {
        self.lock_conversation().turns.clone()
    }

    /// Current request state
    pub fn state(&self) -> ChatState {
        self.lock_conversation().state
    }

    fn lock_conversation(&self) -> std::sync::MutexGuard<'_, Conversation> {
        self.conversation
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
