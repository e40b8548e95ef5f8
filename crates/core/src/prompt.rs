//! Prompt construction for the reasoning provider.

use crate::idea::IdeaInput;

/// System role: the mentor persona plus the exact output schema.
pub const SYSTEM_PROMPT: &str = r#"You are VentureVibe AI Startup Mentor, a structured and analytical early-stage investor.
Evaluate the startup idea you are given and respond with a single JSON object, no prose, matching exactly:
{
  "scores": {
    "marketOpportunity": integer 0-100,
    "executionFeasibility": integer 0-100,
    "differentiation": integer 0-100,
    "monetizationStrength": integer 0-100,
    "riskScore": integer 0-100
  },
  "executiveSummary": "string",
  "riskAssessment": {
    "marketRisk": "string",
    "technicalRisk": "string",
    "adoptionRisk": "string",
    "revenueRisk": "string"
  },
  "mvpPlan": { "day30": "string", "day60": "string", "day90": "string" },
  "positioning": {
    "targetPersona": "string",
    "uniqueAdvantage": "string",
    "competitiveEdge": "string"
  },
  "elevatorPitch": "string",
  "linkedinDraft": "string"
}
A higher riskScore means a riskier idea. Tone: structured, professional, analytical. No hype, no emojis."#;

/// A system + user message pair ready to send to a chat-style provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt {
    pub system: String,
    pub user: String,
}

/// Build the prompt for one idea.
pub fn build_prompt(idea: &IdeaInput) -> AnalysisPrompt {
    let user = format!(
        "Provide a professional, structured analysis for this startup idea.\n\n\
         Idea Title: {}\n\
         Description: {}\n\
         Industry: {}\n\
         Target Market: {}",
        idea.idea_title, idea.idea_description, idea.industry, idea.target_market
    );
    AnalysisPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
