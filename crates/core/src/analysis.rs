//! Structured analysis returned by the reasoning provider.
//!
//! The provider is untrusted: its text is stripped of Markdown code fences,
//! parsed as JSON, and every sub-score is range checked. Anything that does
//! not survive [`parse_report`] is treated as a provider failure upstream.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::scoring::{SubScores, Viability};

/// Matches an opening fence (optionally tagged, e.g. `json`) or a closing fence.
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*```[A-Za-z0-9_-]*\s*$").expect("valid fence regex"));

/// Matches a fence that shares a line with the payload, at either end.
static INLINE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\s*```[A-Za-z0-9_-]*|```\s*\z").expect("valid inline fence regex")
});

/// Per-category risk narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    #[serde(alias = "marketRisk")]
    pub market_risk: String,
    #[serde(alias = "technicalRisk")]
    pub technical_risk: String,
    #[serde(alias = "adoptionRisk")]
    pub adoption_risk: String,
    #[serde(alias = "revenueRisk")]
    pub revenue_risk: String,
}

/// Three-phase MVP roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MvpPlan {
    pub day30: String,
    pub day60: String,
    pub day90: String,
}

/// Market positioning narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Positioning {
    #[serde(alias = "targetPersona")]
    pub target_persona: String,
    #[serde(alias = "uniqueAdvantage")]
    pub unique_advantage: String,
    #[serde(alias = "competitiveEdge")]
    pub competitive_edge: String,
}

/// A complete analysis: five sub-scores plus narrative fields.
///
/// Narrative fields are opaque text; only `scores` feeds the Scoring Engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub scores: SubScores,
    #[serde(alias = "executiveSummary")]
    pub executive_summary: String,
    #[serde(alias = "riskAssessment")]
    pub risk_assessment: RiskAssessment,
    #[serde(alias = "mvpPlan")]
    pub mvp_plan: MvpPlan,
    pub positioning: Positioning,
    #[serde(alias = "elevatorPitch")]
    pub elevator_pitch: String,
    #[serde(alias = "linkedinDraft")]
    pub linkedin_draft: String,
}

impl AnalysisReport {
    /// Composite index and risk tier for this report's scores.
    pub fn viability(&self) -> Viability {
        Viability::from_scores(&self.scores)
    }
}

/// Remove Markdown code fences surrounding (or embedded in) the payload.
///
/// Fences on their own line are dropped first; a fence left touching the
/// start or end of the payload (`` ```json {...} ``` ``) is dropped next.
pub fn strip_code_fences(raw: &str) -> String {
    let unlined = CODE_FENCE.replace_all(raw, "");
    INLINE_FENCE.replace_all(unlined.trim(), "").trim().to_string()
}

/// Parse raw provider text into a validated [`AnalysisReport`].
///
/// Empty text, malformed JSON, missing fields, and out-of-range scores all
/// produce [`CoreError::Validation`].
pub fn parse_report(raw: &str) -> Result<AnalysisReport, CoreError> {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(CoreError::Validation(
            "Provider returned an empty analysis".to_string(),
        ));
    }
    serde_json::from_str(&cleaned)
        .map_err(|e| CoreError::Validation(format!("Malformed analysis payload: {e}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
