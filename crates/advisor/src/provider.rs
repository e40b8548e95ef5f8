use async_trait::async_trait;
use venturevibe_core::prompt::AnalysisPrompt;

use crate::error::ProviderError;

/// An external reasoning service that turns a prompt into raw text.
///
/// Implementations return whatever the model produced; parsing and
/// validation happen in the orchestrator.
#[async_trait]
pub trait ReasoningProvider: Send + Sync {
    async fn complete(&self, prompt: &AnalysisPrompt) -> Result<String, ProviderError>;
}
