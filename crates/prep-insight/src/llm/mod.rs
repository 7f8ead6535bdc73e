//! Outbound language-model collaborator.
//!
//! The report generator only depends on the [`LanguageModel`] trait; the
//! concrete client is injected by the composition root. Every error variant
//! routes the pipeline to the deterministic fallback report, so none of
//! these errors ever reach an end user.

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("language model not configured: {0}")]
    Unavailable(String),
    #[error("language model call failed: {0}")]
    CallFailed(String),
    #[error("language model returned an empty response")]
    EmptyResponse,
}

#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl<M: LanguageModel + ?Sized> LanguageModel for std::sync::Arc<M> {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        (**self).generate(prompt).await
    }
}
