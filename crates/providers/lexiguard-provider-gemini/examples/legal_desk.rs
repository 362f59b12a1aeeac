//! Minimal end-to-end demo: upload a contract, load the sample analysis,
//! and ask the legal assistant one question.
//!
//! Requires `GEMINI_API_KEY` in the environment or a `.env` file.

use lexiguard_core::{load_env, AnalysisSession, Result, SessionEvent};
use lexiguard_provider_gemini::GeminiClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
    load_env().ok();

    let session = AnalysisSession::new(Arc::new(GeminiClient::from_env()?));
    let mut events = session.subscribe();

    let sample = session.load_sample().await;
    println!("sample: {} ({})", sample.name, sample.risk_level().label());

    let upload = session.contracts().submit_upload("Property_Sale_Pune.pdf").await;
    println!("uploaded: {} [{}]", upload.name, upload.category);

    session
        .chat()
        .submit("What should I check before signing a builder-buyer agreement?")
        .await;
    for turn in session.chat().turns() {
        println!("[{:?}] {}", turn.role, turn.text);
    }

    // Wait for the pending analysis to finish
    while let Ok(event) = events.recv().await {
        if let SessionEvent::ContractAnalyzed(id) = event {
            if id == upload.id {
                break;
            }
        }
    }
    if let Some(done) = session.contracts().contract(upload.id).await {
        println!(
            "analysis done: {} findings, {}",
            done.clauses.as_ref().map(Vec::len).unwrap_or(0),
            done.risk_level().label()
        );
    }

    Ok(())
}
