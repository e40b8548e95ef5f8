use std::time::Duration;

/// Default bound on a single provider call.
pub const DEFAULT_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(30);

/// Reasoning provider configuration.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Base URL of an OpenAI-compatible API (no trailing `/chat/completions`).
    pub api_url: String,
    /// Bearer key. Empty disables the `Authorization` header.
    pub api_key: String,
    pub model: String,
    /// How long the orchestrator waits before substituting the fallback.
    pub timeout: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            timeout: DEFAULT_ANALYSIS_TIMEOUT,
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `LLM_API_URL`           | `https://api.openai.com/v1` |
    /// | `LLM_API_KEY`           | (empty)                     |
    /// | `LLM_MODEL`             | `gpt-4o-mini`               |
    /// | `ANALYSIS_TIMEOUT_SECS` | `30`                        |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = std::env::var("LLM_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let api_key = std::env::var("LLM_API_KEY").unwrap_or_default();

        let model = std::env::var("LLM_MODEL").unwrap_or(defaults.model);

        let timeout = std::env::var("ANALYSIS_TIMEOUT_SECS")
            .map(|secs| {
                Duration::from_secs(
                    secs.parse()
                        .expect("ANALYSIS_TIMEOUT_SECS must be a valid u64"),
                )
            })
            .unwrap_or(defaults.timeout);

        if api_key.is_empty() {
            tracing::warn!("LLM_API_KEY is not set; analyses will use the fallback result");
        }

        Self {
            api_url,
            api_key,
            model,
            timeout,
        }
    }
}
