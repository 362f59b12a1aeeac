//! Analysis session facade
//!
//! Bundles the contract store, the chat session, and the event bus into one
//! explicit context object. All state is owned here and dies with the
//! session; nothing is global and nothing is persisted.

use crate::chat::ChatSession;
use crate::contracts::{sample_contract, ContractRecord, ContractStore};
use crate::events::{event_channel, SessionEventReceiver, SessionEventSender};
use crate::generation::TextGenerator;
use std::sync::Arc;
use std::time::Duration;

/// One user-facing analysis session: contracts, conversation, events
pub struct AnalysisSession {
    contracts: ContractStore,
    chat: ChatSession,
    events: SessionEventSender,
}

impl AnalysisSession {
    /// Create a session backed by the given text-generation provider
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        let (events, _rx) = event_channel();
        let contracts = ContractStore::new(events.clone());
        let chat = ChatSession::new(generator, events.clone());

        tracing::info!("analysis session created");
        Self {
            contracts,
            chat,
            events,
        }
    }

    /// Override the simulated analysis duration (used by tests and demos)
    pub fn with_analysis_delay(mut self, delay: Duration) -> Self {
        self.contracts = self.contracts.with_analysis_delay(delay);
        self
    }

    /// The contract store
    pub fn contracts(&self) -> &ContractStore {
        &self.contracts
    }

    /// The chat session
    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    /// Subscribe to state-change events
    pub fn subscribe(&self) -> SessionEventReceiver {
        self.events.subscribe()
    }

    /// Publish the canned sample analysis into the store and return it
    pub async fn load_sample(&self) -> ContractRecord {
        let contract = sample_contract();
        self.contracts.add_record(contract.clone()).await;
        contract
    }
}
