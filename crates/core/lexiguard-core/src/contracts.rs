//! Contract records and the upload-analysis lifecycle
//!
//! Uploads are simulated: a record enters the store in `Analyzing` state and
//! a background task completes it after a fixed delay, attaching the canned
//! clause findings. Each upload runs on its own independent timer.

use crate::clauses::{sample_clauses, ClauseFinding};
use crate::config::{get_env_int, ANALYSIS_DELAY_MS_VAR};
use crate::events::{SessionEvent, SessionEventSender};
use crate::risk::RiskLevel;
use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Default simulated analysis duration
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(4000);

/// Contract category derived from the uploaded file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractCategory {
    /// Property / real-estate agreement
    RealEstate,
    /// Anything else
    General,
}

impl ContractCategory {
    /// Derive the category from a file name (case-insensitive substring check)
    pub fn for_file_name(name: &str) -> Self {
        if name.to_lowercase().contains("property") {
            ContractCategory::RealEstate
        } else {
            ContractCategory::General
        }
    }
}

impl std::fmt::Display for ContractCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractCategory::RealEstate => write!(f, "Real Estate"),
            ContractCategory::General => write!(f, "General Contract"),
        }
    }
}

/// Analysis status of an uploaded contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    /// Upload accepted, analysis pending
    Analyzing,
    /// Analysis finished, clause findings attached
    Completed,
}

/// An uploaded contract and its analysis state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    /// Unique record id
    pub id: Uuid,

    /// Uploaded file name
    pub name: String,

    /// Category derived from the file name
    pub category: ContractCategory,

    /// Overall risk score in `[0, 100]`
    pub risk_score: u8,

    /// Upload date (UTC)
    pub uploaded_at: NaiveDate,

    /// Current analysis status
    pub status: ContractStatus,

    /// Clause findings, present once analysis completes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clauses: Option<Vec<ClauseFinding>>,
}

impl ContractRecord {
    /// Risk level for the overall score
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::classify(self.risk_score)
    }
}

/// The canned "View sample analysis" contract
pub fn sample_contract() -> ContractRecord {
    ContractRecord {
        id: Uuid::new_v4(),
        name: "Property Purchase Agreement - Mumbai.pdf".to_string(),
        category: ContractCategory::RealEstate,
        risk_score: 65,
        uploaded_at: NaiveDate::from_ymd_opt(2025, 1, 27).unwrap_or_default(),
        status: ContractStatus::Completed,
        clauses: Some(sample_clauses()),
    }
}

/// In-memory store of contract records, newest first
#[derive(Clone)]
pub struct ContractStore {
    records: Arc<RwLock<Vec<ContractRecord>>>,
    analysis_delay: Duration,
    events: SessionEventSender,
}

impl ContractStore {
    /// Create an empty store publishing change events on `events`.
    ///
    /// The simulated analysis delay defaults to [`DEFAULT_ANALYSIS_DELAY`]
    /// and honors the `LEXIGUARD_ANALYSIS_DELAY_MS` environment variable.
    pub fn new(events: SessionEventSender) -> Self {
        let delay_ms = get_env_int(
            ANALYSIS_DELAY_MS_VAR,
            DEFAULT_ANALYSIS_DELAY.as_millis() as u64,
        );
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            analysis_delay: Duration::from_millis(delay_ms),
            events,
        }
    }

    /// Override the simulated analysis duration
    pub fn with_analysis_delay(mut self, delay: Duration) -> Self {
        self.analysis_delay = delay;
        self
    }

    /// The simulated analysis duration in effect
    pub fn analysis_delay(&self) -> Duration {
        self.analysis_delay
    }

    /// Accept an upload and schedule its analysis.
    ///
    /// The returned record is `Analyzing` and sits at the head of the store.
    /// A background timer transitions it to `Completed` (with the fixture
    /// clause set attached) after the analysis delay; concurrent uploads
    /// each pend on their own timer.
    pub async fn submit_upload(&self, file_name: &str) -> ContractRecord {
        let record = ContractRecord {
            id: Uuid::new_v4(),
            name: file_name.to_string(),
            category: ContractCategory::for_file_name(file_name),
            risk_score: rand::thread_rng().gen_range(30..70),
            uploaded_at: Utc::now().date_naive(),
            status: ContractStatus::Analyzing,
            clauses: None,
        };

        tracing::info!(
            id = %record.id,
            name = %record.name,
            category = %record.category,
            "contract upload accepted"
        );

        self.records.write().await.insert(0, record.clone());
        let _ = self.events.send(SessionEvent::ContractAdded(record.id));

        self.schedule_completion(record.id);
        record
    }

    /// Insert an already-analyzed record at the head of the store
    pub async fn add_record(&self, record: ContractRecord) {
        let id = record.id;
        self.records.write().await.insert(0, record);
        let _ = self.events.send(SessionEvent::ContractAdded(id));
    }

    /// Snapshot of all records, newest first
    pub async fn contracts(&self) -> Vec<ContractRecord> {
        self.records.read().await.clone()
    }

    /// Look up a record by id
    pub async fn contract(&self, id: Uuid) -> Option<ContractRecord> {
        self.records.read().await.iter().find(|r| r.id == id).cloned()
    }

    fn schedule_completion(&self, id: Uuid) {
        let records = Arc::clone(&self.records);
        let events = self.events.clone();
        let delay = self.analysis_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut records = records.write().await;
            match records.iter_mut().find(|r| r.id == id) {
                Some(record) => {
                    record.status = ContractStatus::Completed;
                    record.clauses = Some(sample_clauses());
                    tracing::info!(id = %id, score = record.risk_score, "contract analysis completed");
                    let _ = events.send(SessionEvent::ContractAnalyzed(id));
                }
                None => {
                    tracing::debug!(id = %id, "contract disappeared before analysis completed");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_channel;

    // Pins the delay so env-override tests running in parallel can't skew
    // the virtual-time assertions
    fn test_store() -> ContractStore {
        let (events, _rx) = event_channel();
        ContractStore::new(events).with_analysis_delay(DEFAULT_ANALYSIS_DELAY)
    }

    #[test]
    fn test_category_from_file_name() {
        assert_eq!(
            ContractCategory::for_file_name("My_PROPERTY_deal.pdf"),
            ContractCategory::RealEstate
        );
        assert_eq!(
            ContractCategory::for_file_name("vendor-nda.pdf"),
            ContractCategory::General
        );
        assert_eq!(ContractCategory::RealEstate.to_string(), "Real Estate");
        assert_eq!(ContractCategory::General.to_string(), "General Contract");
    }

    #[test]
    fn test_analysis_delay_env_override() {
        let (events, _rx) = event_channel();
        std::env::set_var(ANALYSIS_DELAY_MS_VAR, "250");
        let store = ContractStore::new(events.clone());
        std::env::remove_var(ANALYSIS_DELAY_MS_VAR);

        assert_eq!(store.analysis_delay(), Duration::from_millis(250));
        // An explicit override still wins over the environment
        let store = ContractStore::new(events).with_analysis_delay(Duration::from_millis(7));
        assert_eq!(store.analysis_delay(), Duration::from_millis(7));
    }

    #[test]
    fn test_sample_contract_shape() {
        let contract = sample_contract();
        assert_eq!(contract.status, ContractStatus::Completed);
        assert_eq!(contract.risk_score, 65);
        assert_eq!(contract.risk_level(), RiskLevel::Medium);
        assert_eq!(contract.clauses.as_ref().map(Vec::len), Some(5));
        assert_eq!(contract.uploaded_at.to_string(), "2025-01-27");
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_starts_analyzing() {
        let store = test_store();
        let record = store.submit_upload("lease-agreement.pdf").await;

        assert_eq!(record.status, ContractStatus::Analyzing);
        assert!(record.clauses.is_none());
        assert!((30..70).contains(&record.risk_score));

        let stored = store.contract(record.id).await.unwrap();
        assert_eq!(stored.status, ContractStatus::Analyzing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_completes_after_delay_and_never_before() {
        let store = test_store();
        let record = store.submit_upload("property-sale.pdf").await;
        // Let the completion task register its timer
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(3999)).await;
        tokio::task::yield_now().await;
        let pending = store.contract(record.id).await.unwrap();
        assert_eq!(pending.status, ContractStatus::Analyzing);

        tokio::time::advance(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        let done = store.contract(record.id).await.unwrap();
        assert_eq!(done.status, ContractStatus::Completed);
        assert_eq!(done.clauses.as_ref().map(Vec::len), Some(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_uploads_complete_independently() {
        let store = test_store();
        let first = store.submit_upload("first.pdf").await;
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(2000)).await;
        tokio::task::yield_now().await;
        let second = store.submit_upload("second.pdf").await;
        tokio::task::yield_now().await;
        assert_ne!(first.id, second.id);

        // Newest upload sits at the head
        let snapshot = store.contracts().await;
        assert_eq!(snapshot[0].id, second.id);
        assert_eq!(snapshot[1].id, first.id);

        // First completes at t=4000, second is still pending
        tokio::time::advance(Duration::from_millis(2001)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            store.contract(first.id).await.unwrap().status,
            ContractStatus::Completed
        );
        assert_eq!(
            store.contract(second.id).await.unwrap().status,
            ContractStatus::Analyzing
        );

        // Second completes on its own timer at t=6000
        tokio::time::advance(Duration::from_millis(2000)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            store.contract(second.id).await.unwrap().status,
            ContractStatus::Completed
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_publishes_event() {
        let (events, mut rx) = event_channel();
        let store =
            ContractStore::new(events).with_analysis_delay(Duration::from_millis(10));
        let record = store.submit_upload("deal.pdf").await;

        assert_eq!(rx.recv().await.unwrap(), SessionEvent::ContractAdded(record.id));

        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(11)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            rx.recv().await.unwrap(),
            SessionEvent::ContractAnalyzed(record.id)
        );
    }
}
