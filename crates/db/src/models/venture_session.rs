//! Venture session and venture analysis models and DTOs.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use venturevibe_core::analysis::{AnalysisReport, MvpPlan, Positioning, RiskAssessment};
use venturevibe_core::types::{DbId, Timestamp};

/// A venture session row from the `venture_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VentureSession {
    pub id: DbId,
    pub user_id: DbId,
    pub idea_title: String,
    pub idea_description: String,
    pub industry: String,
    pub target_market: String,
    pub created_at: Timestamp,
}

/// A venture analysis row from the `venture_analyses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VentureAnalysis {
    pub id: DbId,
    pub session_id: DbId,
    pub startup_viability_index: i32,
    pub market_opportunity_score: i32,
    pub execution_feasibility_score: i32,
    pub differentiation_score: i32,
    pub monetization_score: i32,
    pub risk_score: i32,
    pub risk_exposure_level: String,
    pub executive_summary: String,
    pub risk_assessment: Json<RiskAssessment>,
    pub mvp_plan: Json<MvpPlan>,
    pub positioning: Json<Positioning>,
    pub elevator_pitch: String,
    pub linkedin_draft: String,
    pub is_fallback: bool,
    pub created_at: Timestamp,
}

/// A session together with its analysis, as returned to the owning user.
#[derive(Debug, Clone, Serialize)]
pub struct VentureSessionDetail {
    #[serde(flatten)]
    pub session: VentureSession,
    pub analysis: VentureAnalysis,
    pub is_fallback: bool,
}

impl VentureSessionDetail {
    pub fn new(session: VentureSession, analysis: VentureAnalysis) -> Self {
        let is_fallback = analysis.is_fallback;
        Self {
            session,
            analysis,
            is_fallback,
        }
    }
}

/// DTO for inserting an analysis alongside its session.
///
/// Built from a finalized [`AnalysisReport`]; the composite index and risk
/// tier are computed here by the Scoring Engine.
#[derive(Debug, Clone)]
pub struct CreateVentureAnalysis {
    pub startup_viability_index: i32,
    pub market_opportunity_score: i32,
    pub execution_feasibility_score: i32,
    pub differentiation_score: i32,
    pub monetization_score: i32,
    pub risk_score: i32,
    pub risk_exposure_level: String,
    pub executive_summary: String,
    pub risk_assessment: RiskAssessment,
    pub mvp_plan: MvpPlan,
    pub positioning: Positioning,
    pub elevator_pitch: String,
    pub linkedin_draft: String,
    pub is_fallback: bool,
}

impl CreateVentureAnalysis {
    pub fn from_report(report: &AnalysisReport, is_fallback: bool) -> Self {
        let viability = report.viability();
        let scores = &report.scores;
        Self {
            startup_viability_index: viability.startup_viability_index,
            market_opportunity_score: scores.market_opportunity(),
            execution_feasibility_score: scores.execution_feasibility(),
            differentiation_score: scores.differentiation(),
            monetization_score: scores.monetization_strength(),
            risk_score: scores.risk_score(),
            risk_exposure_level: viability.risk_exposure_level.as_str().to_string(),
            executive_summary: report.executive_summary.clone(),
            risk_assessment: report.risk_assessment.clone(),
            mvp_plan: report.mvp_plan.clone(),
            positioning: report.positioning.clone(),
            elevator_pitch: report.elevator_pitch.clone(),
            linkedin_draft: report.linkedin_draft.clone(),
            is_fallback,
        }
    }
}

/// Result of attempting to record a session.
#[derive(Debug)]
pub enum RecordOutcome {
    /// Session, analysis, and quota increment committed together.
    Recorded(VentureSessionDetail),
    /// The user's weekly quota was already used up when the write was attempted.
    QuotaExhausted,
}
