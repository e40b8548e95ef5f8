//! Fallback Result substituted when the reasoning provider fails or times out.
//!
//! The scores are a fixed constant and the narrative is a deterministic
//! template over the idea's title, industry and target market. Nothing here
//! is randomized, so every fallback for the same idea is byte-identical.

use crate::analysis::{AnalysisReport, MvpPlan, Positioning, RiskAssessment};
use crate::idea::IdeaInput;
use crate::scoring::SubScores;

/// Sub-scores used for every fallback analysis.
pub const FALLBACK_SCORES: SubScores = SubScores {
    market_opportunity: 72,
    execution_feasibility: 65,
    differentiation: 68,
    monetization_strength: 60,
    risk_score: 45,
};

/// Marker prefixed to the executive summary of every fallback analysis.
pub const FALLBACK_SUMMARY_PREFIX: &str = "(Demo Mode Result)";

/// Build the fallback analysis for `idea`.
pub fn fallback_report(idea: &IdeaInput) -> AnalysisReport {
    let industry = &idea.industry;
    let market = &idea.target_market;
    let title = &idea.idea_title;

    AnalysisReport {
        scores: FALLBACK_SCORES,
        executive_summary: format!(
            "{FALLBACK_SUMMARY_PREFIX} AI service is currently unavailable. Based on typical \
             patterns for {industry}, your idea shows promising potential with moderate \
             execution risks."
        ),
        risk_assessment: RiskAssessment {
            market_risk: format!("Standard market competition for {industry}."),
            technical_risk: "Initial development and scaling challenges.".to_string(),
            adoption_risk: format!("Customer acquisition in {market} requires validation."),
            revenue_risk: "Monetization strategy requires market testing.".to_string(),
        },
        mvp_plan: MvpPlan {
            day30: "Validate core assumptions and build MVP landing page.".to_string(),
            day60: "Develop functional prototype for early beta testing.".to_string(),
            day90: "Refine product based on user feedback and prepare for launch.".to_string(),
        },
        positioning: Positioning {
            target_persona: format!("Core users within {market}."),
            unique_advantage: "Targeted solution for identified pain points.".to_string(),
            competitive_edge: "Agile iteration and customer-centric design.".to_string(),
        },
        elevator_pitch: format!(
            "{title} aims to transform {industry} by providing a robust solution for {market}."
        ),
        linkedin_draft: format!(
            "Just used VentureVibe AI to analyze my startup idea: {title}! \
             Extremely insightful roadmap. #Startup #VentureVibe"
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{composite_index, risk_tier, RiskTier};

    fn idea() -> IdeaInput {
        IdeaInput {
            idea_title: "Solar Kiosk".to_string(),
            idea_description: "Pay-as-you-go solar charging kiosks.".to_string(),
            industry: "CleanTech".to_string(),
            target_market: "Rural East Africa".to_string(),
        }
    }

    #[test]
    fn fallback_scores_are_in_range() {
        let s = FALLBACK_SCORES;
        assert!(SubScores::new(
            s.market_opportunity(),
            s.execution_feasibility(),
            s.differentiation(),
            s.monetization_strength(),
            s.risk_score(),
        )
        .is_ok());
    }

    #[test]
    fn fallback_composite_and_tier() {
        // 0.25*72 + 0.2*65 + 0.2*68 + 0.2*60 + 0.15*55 = 64.85
        assert_eq!(composite_index(&FALLBACK_SCORES), 65);
        assert_eq!(risk_tier(FALLBACK_SCORES.risk_score()), RiskTier::Moderate);
    }

    #[test]
    fn narrative_mentions_idea_fields() {
        let report = fallback_report(&idea());
        assert!(report.executive_summary.starts_with(FALLBACK_SUMMARY_PREFIX));
        assert!(report.executive_summary.contains("CleanTech"));
        assert!(report.risk_assessment.adoption_risk.contains("Rural East Africa"));
        assert!(report.positioning.target_persona.contains("Rural East Africa"));
        assert!(report.elevator_pitch.starts_with("Solar Kiosk"));
    }

    #[test]
    fn fallback_is_deterministic() {
        assert_eq!(fallback_report(&idea()), fallback_report(&idea()));
    }
}
