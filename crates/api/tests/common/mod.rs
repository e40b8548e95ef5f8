#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use venturevibe_advisor::{Advisor, AdvisorConfig, ProviderError, ReasoningProvider};
use venturevibe_api::auth::jwt::{generate_access_token, JwtConfig};
use venturevibe_api::config::ServerConfig;
use venturevibe_api::router::build_app_router;
use venturevibe_api::state::AppState;
use venturevibe_core::prompt::AnalysisPrompt;
use venturevibe_core::quota::QuotaPolicy;
use venturevibe_db::models::user::{CreateUser, User};
use venturevibe_db::repositories::UserRepo;

/// A well-formed provider reply (composite index 77, tier Low).
pub const VALID_ANALYSIS: &str = r#"```json
{
  "scores": {"marketOpportunity": 90, "executionFeasibility": 80,
             "differentiation": 70, "monetizationStrength": 60, "riskScore": 20},
  "executiveSummary": "A focused product with clear buyers.",
  "riskAssessment": {"marketRisk": "Incumbents.", "technicalRisk": "Low.",
                     "adoptionRisk": "Habit change.", "revenueRisk": "Churn."},
  "mvpPlan": {"day30": "Interviews.", "day60": "Prototype.", "day90": "Pilot."},
  "positioning": {"targetPersona": "Ops leads.", "uniqueAdvantage": "Speed.",
                  "competitiveEdge": "Price."},
  "elevatorPitch": "Faster ops for small teams.",
  "linkedinDraft": "Excited to share..."
}
```"#;

/// Provider stub that returns a fixed reply or fails with a 503.
pub struct StubProvider {
    reply: Option<&'static str>,
}

impl StubProvider {
    pub fn replying(reply: &'static str) -> Self {
        Self { reply: Some(reply) }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl ReasoningProvider for StubProvider {
    async fn complete(&self, _prompt: &AnalysisPrompt) -> Result<String, ProviderError> {
        match self.reply {
            Some(text) => Ok(text.to_string()),
            None => Err(ProviderError::Api {
                status: 503,
                body: "unavailable".to_string(),
            }),
        }
    }
}

/// Build a test `ServerConfig` with safe defaults and the standard quota.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
        quota: QuotaPolicy::default(),
        advisor: AdvisorConfig {
            timeout: Duration::from_secs(5),
            ..AdvisorConfig::default()
        },
    }
}

/// Build the full application router with a provider that always fails, so
/// every analysis is the fallback.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_provider(pool, Arc::new(StubProvider::failing()))
}

/// Build the full application router around the given provider, using the
/// same middleware stack as production.
pub fn build_test_app_with_provider(pool: PgPool, provider: Arc<dyn ReasoningProvider>) -> Router {
    let config = test_config();
    let advisor = Arc::new(Advisor::new(provider, config.advisor.timeout));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        advisor,
    };
    build_app_router(state, &config)
}

/// Create a user and return it with a valid bearer token.
pub async fn create_user_with_token(pool: &PgPool, email: &str, name: Option<&str>) -> (User, String) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            name: name.map(str::to_string),
        },
    )
    .await
    .expect("user creation should succeed");
    let token = generate_access_token(user.id, &test_config().jwt)
        .expect("token generation should succeed");
    (user, token)
}

/// A valid idea payload in the camelCase shape clients send.
pub fn idea_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "ideaTitle": title,
        "ideaDescription": "Route optimization for regional courier fleets.",
        "industry": "Logistics",
        "targetMarket": "Regional couriers",
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::delete(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Assert a response status, printing the body on mismatch.
pub async fn expect_status(response: Response, status: StatusCode) -> serde_json::Value {
    let actual = response.status();
    let json = if actual == StatusCode::NO_CONTENT {
        serde_json::Value::Null
    } else {
        body_json(response).await
    };
    assert_eq!(actual, status, "unexpected status, body: {json}");
    json
}
