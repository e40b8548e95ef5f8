/// Errors from the reasoning provider layer.
///
/// These never reach API callers; the orchestrator logs them and falls back.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered without any message content.
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// The content was not a valid analysis (bad JSON, missing fields,
    /// or scores outside 0-100).
    #[error("Unusable analysis payload: {0}")]
    Parse(String),

    /// The provider task ended without delivering a result.
    #[error("Provider task aborted before settling")]
    Aborted,
}
