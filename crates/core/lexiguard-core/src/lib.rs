//! LexiGuard Core
//!
//! This crate provides the headless core of the LexiGuard contract-analysis
//! product:
//!
//! - In-memory contract store with a simulated upload-analysis lifecycle
//! - Pure risk classifier mapping scores to three levels
//! - Canned clause-finding fixture set
//! - Chat session with an explicit single-in-flight state machine
//! - Provider seam (`TextGenerator`) for hosted generation backends
//! - Broadcast event bus replacing direct view re-render calls
//!
//! # Example
//!
//! ```no_run
//! use lexiguard_core::{AnalysisSession, Result, TextGenerator};
//! use std::sync::Arc;
//!
//! # async fn run(generator: Arc<dyn TextGenerator>) -> Result<()> {
//! let session = AnalysisSession::new(generator);
//! let record = session.contracts().submit_upload("property-sale.pdf").await;
//! println!("{} is {}", record.name, record.category);
//! session.chat().submit("What does RERA say about refunds?").await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export commonly used types
pub use uuid::Uuid;

// Core modules
pub mod chat;
pub mod clauses;
pub mod config;
pub mod contracts;
pub mod error;
pub mod events;
pub mod generation;
pub mod risk;
pub mod session;

// Re-export main types
pub use chat::{
    ChatRole, ChatSession, ChatState, ChatTurn, SubmitOutcome, FALLBACK_REPLY,
    LEGAL_ASSISTANT_PREAMBLE,
};
pub use clauses::{sample_clauses, ClauseFinding};
pub use config::{get_env_int, get_env_or, get_required_env, load_env};
pub use contracts::{
    sample_contract, ContractCategory, ContractRecord, ContractStatus, ContractStore,
    DEFAULT_ANALYSIS_DELAY,
};
pub use error::{LexiError, Result};
pub use events::{event_channel, SessionEvent, SessionEventReceiver, SessionEventSender};
pub use generation::TextGenerator;
pub use risk::RiskLevel;
pub use session::AnalysisSession;
