use venturevibe_advisor::AdvisorConfig;
use venturevibe_core::quota::{QuotaPolicy, DEFAULT_QUOTA_WINDOW_DAYS, DEFAULT_WEEKLY_SESSION_LIMIT};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`). Must exceed the
    /// analysis timeout so the fallback path can still respond.
    pub request_timeout_secs: u64,
    /// JWT verification configuration.
    pub jwt: JwtConfig,
    /// Weekly analysis quota.
    pub quota: QuotaPolicy,
    /// Reasoning provider endpoint, model, and timeout.
    pub advisor: AdvisorConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                       |
    /// | `WEEKLY_SESSION_LIMIT` | `3`                        |
    /// | `QUOTA_WINDOW_DAYS`    | `7`                        |
    ///
    /// JWT and provider variables are documented on [`JwtConfig::from_env`]
    /// and [`AdvisorConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let weekly_limit: i32 = std::env::var("WEEKLY_SESSION_LIMIT")
            .unwrap_or_else(|_| DEFAULT_WEEKLY_SESSION_LIMIT.to_string())
            .parse()
            .expect("WEEKLY_SESSION_LIMIT must be a valid i32");

        let window_days: i64 = std::env::var("QUOTA_WINDOW_DAYS")
            .unwrap_or_else(|_| DEFAULT_QUOTA_WINDOW_DAYS.to_string())
            .parse()
            .expect("QUOTA_WINDOW_DAYS must be a valid i64");

        let jwt = JwtConfig::from_env();
        let advisor = AdvisorConfig::from_env();

        if advisor.timeout.as_secs() >= request_timeout_secs {
            tracing::warn!(
                analysis_timeout_secs = advisor.timeout.as_secs(),
                request_timeout_secs,
                "Request timeout does not exceed the analysis timeout; slow analyses will return 408",
            );
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            quota: QuotaPolicy {
                weekly_limit,
                window: chrono::Duration::days(window_days),
            },
            advisor,
        }
    }
}
