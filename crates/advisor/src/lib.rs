//! Reasoning provider integration and the Analysis Orchestrator.
//!
//! [`ReasoningProvider`] is the seam to the external model;
//! [`ChatCompletionsProvider`] implements it over HTTP. [`Advisor`] races a
//! provider call against a timeout and always finalizes with a usable
//! analysis, substituting the fallback on timeout or failure.

pub mod chat;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod provider;

pub use chat::ChatCompletionsProvider;
pub use config::AdvisorConfig;
pub use error::ProviderError;
pub use orchestrator::{Advisor, FinalizedAnalysis, Settlement};
pub use provider::ReasoningProvider;
