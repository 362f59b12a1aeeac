//! Text-generation provider seam
//!
//! The chat session talks to a hosted model only through this trait, so
//! tests can stub the endpoint and providers stay swappable.

use crate::Result;
use async_trait::async_trait;

/// A backend capable of answering a free-text prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Generate a completion for `prompt`.
    ///
    /// Errors use the generation taxonomy (`RateLimited`, `RequestFailed`,
    /// `Transport`, `EmptyResponse`); callers decide how to surface them.
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LexiError;

    struct CannedGenerator;

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        fn name(&self) -> &str {
            "canned"
        }

        async fn generate_text(&self, prompt: &str) -> Result<String> {
            if prompt.is_empty() {
                return Err(LexiError::EmptyResponse);
            }
            Ok(format!("echo: {prompt}"))
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let generator: Box<dyn TextGenerator> = Box::new(CannedGenerator);
        assert_eq!(generator.name(), "canned");
        assert_eq!(generator.generate_text("hi").await.unwrap(), "echo: hi");
    }
}
