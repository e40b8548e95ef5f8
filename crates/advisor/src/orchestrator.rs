//! Analysis Orchestrator: provider call raced against a timeout.
//!
//! Each call to [`Advisor::analyze`] moves through
//! `Pending -> {Succeeded | TimedOut | Failed} -> Finalized`. The provider
//! runs in its own task and reports into a oneshot channel, which acts as a
//! single-resolution slot: the orchestrator takes whichever of the channel
//! or the timer settles first. The provider task is cancelled through a
//! [`CancellationToken`] as soon as the orchestrator finalizes or is
//! dropped, so a late provider result is never observed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use venturevibe_core::analysis::{parse_report, AnalysisReport};
use venturevibe_core::fallback::fallback_report;
use venturevibe_core::idea::IdeaInput;
use venturevibe_core::prompt::build_prompt;
use venturevibe_core::types::DbId;

use crate::error::ProviderError;
use crate::provider::ReasoningProvider;

/// How a provider race settled.
#[derive(Debug)]
pub enum Settlement {
    /// The provider answered in time with a valid analysis.
    Succeeded(AnalysisReport),
    /// The timer fired first.
    TimedOut,
    /// The provider answered in time but the call or its payload failed.
    Failed(ProviderError),
}

/// The only output of the orchestrator.
#[derive(Debug, Clone)]
pub struct FinalizedAnalysis {
    pub report: AnalysisReport,
    /// `true` when `report` is the fallback result.
    pub is_fallback: bool,
}

/// Runs analyses against a [`ReasoningProvider`] with a bounded wait.
pub struct Advisor {
    provider: Arc<dyn ReasoningProvider>,
    timeout: Duration,
}

impl Advisor {
    pub fn new(provider: Arc<dyn ReasoningProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Analyze `idea` on behalf of `user_id`.
    ///
    /// Never fails: provider errors and timeouts are logged and replaced by
    /// the fallback analysis.
    pub async fn analyze(&self, idea: &IdeaInput, user_id: DbId) -> FinalizedAnalysis {
        let started = Instant::now();
        let settlement = self.race(idea).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match settlement {
            Settlement::Succeeded(report) => {
                tracing::debug!(
                    user_id,
                    idea_title = %idea.idea_title,
                    elapsed_ms,
                    "Provider analysis succeeded",
                );
                FinalizedAnalysis {
                    report,
                    is_fallback: false,
                }
            }
            Settlement::TimedOut => {
                tracing::warn!(
                    user_id,
                    idea_title = %idea.idea_title,
                    timeout_secs = self.timeout.as_secs(),
                    "Provider analysis timed out, using fallback",
                );
                Self::fallback(idea)
            }
            Settlement::Failed(e) => {
                tracing::error!(
                    user_id,
                    idea_title = %idea.idea_title,
                    elapsed_ms,
                    error = %e,
                    "Provider analysis failed, using fallback",
                );
                Self::fallback(idea)
            }
        }
    }

    /// Run the provider/timer race and report how it settled.
    pub async fn race(&self, idea: &IdeaInput) -> Settlement {
        let prompt = build_prompt(idea);
        let cancel = CancellationToken::new();
        // Cancels the provider task on every exit path, including drop.
        let _guard = cancel.clone().drop_guard();

        let (slot_tx, slot_rx) = oneshot::channel();
        let provider = Arc::clone(&self.provider);
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = cancel.cancelled() => return,
                result = provider.complete(&prompt) => result,
            };
            // The receiver is gone if the timer already won.
            let _ = slot_tx.send(result);
        });

        tokio::select! {
            received = slot_rx => match received {
                Ok(Ok(text)) => match parse_report(&text) {
                    Ok(report) => Settlement::Succeeded(report),
                    Err(e) => Settlement::Failed(ProviderError::Parse(e.to_string())),
                },
                Ok(Err(e)) => Settlement::Failed(e),
                Err(_) => Settlement::Failed(ProviderError::Aborted),
            },
            _ = tokio::time::sleep(self.timeout) => Settlement::TimedOut,
        }
    }

    fn fallback(idea: &IdeaInput) -> FinalizedAnalysis {
        FinalizedAnalysis {
            report: fallback_report(idea),
            is_fallback: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
