//! Session event bus
//!
//! Replaces the original UI's direct re-render calls: state mutations publish
//! an event and any number of views subscribe.

use crate::chat::ChatRole;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Capacity of the session event channel
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// State-change notifications emitted by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new upload entered the store in `Analyzing` state
    ContractAdded(Uuid),
    /// A pending upload completed its analysis
    ContractAnalyzed(Uuid),
    /// A chat turn was appended to the conversation
    TurnAppended(ChatRole),
}

/// Sender half of the session event channel
pub type SessionEventSender = broadcast::Sender<SessionEvent>;

/// Receiver half of the session event channel
pub type SessionEventReceiver = broadcast::Receiver<SessionEvent>;

/// Create a session event channel with the default capacity
pub fn event_channel() -> (SessionEventSender, SessionEventReceiver) {
    broadcast::channel(EVENT_CHANNEL_CAPACITY)
}
