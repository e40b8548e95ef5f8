//! Scoring Engine: composite Startup Viability Index and risk tier.
//!
//! The five sub-scores are weighted into a single 0..=100 index. Weights are
//! expressed in whole percent so the computation is exact integer math and
//! round-half-up is `(sum + 50) / 100`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowest valid sub-score.
pub const MIN_SCORE: i32 = 0;

/// Highest valid sub-score.
pub const MAX_SCORE: i32 = 100;

/// Weight of `market_opportunity`, in percent.
pub const WEIGHT_MARKET_OPPORTUNITY: i32 = 25;
/// Weight of `execution_feasibility`, in percent.
pub const WEIGHT_EXECUTION_FEASIBILITY: i32 = 20;
/// Weight of `differentiation`, in percent.
pub const WEIGHT_DIFFERENTIATION: i32 = 20;
/// Weight of `monetization_strength`, in percent.
pub const WEIGHT_MONETIZATION_STRENGTH: i32 = 20;
/// Weight of the inverted risk score `(100 - risk_score)`, in percent.
pub const WEIGHT_INVERTED_RISK: i32 = 15;

const WEIGHT_TOTAL: i32 = WEIGHT_MARKET_OPPORTUNITY
    + WEIGHT_EXECUTION_FEASIBILITY
    + WEIGHT_DIFFERENTIATION
    + WEIGHT_MONETIZATION_STRENGTH
    + WEIGHT_INVERTED_RISK;

const _: () = assert!(WEIGHT_TOTAL == 100, "scoring weights must sum to 100%");

/// Highest risk score still classified as [`RiskTier::Low`].
pub const LOW_RISK_MAX: i32 = 30;

/// Highest risk score still classified as [`RiskTier::Moderate`].
pub const MODERATE_RISK_MAX: i32 = 60;

// ---------------------------------------------------------------------------
// Sub-scores
// ---------------------------------------------------------------------------

/// Unchecked sub-score tuple as it arrives from the provider or a database row.
///
/// Accepts both the provider's camelCase keys and snake_case keys.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawSubScores {
    #[serde(alias = "marketOpportunity")]
    pub market_opportunity: i64,
    #[serde(alias = "executionFeasibility")]
    pub execution_feasibility: i64,
    pub differentiation: i64,
    #[serde(alias = "monetizationStrength")]
    pub monetization_strength: i64,
    #[serde(alias = "riskScore")]
    pub risk_score: i64,
}

/// Five sub-scores, each guaranteed to lie in `0..=100`.
///
/// The only ways to obtain one are [`SubScores::new`], deserialization
/// (which routes through the same range check), or the crate's fallback
/// constant, so scoring functions never see an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSubScores")]
pub struct SubScores {
    pub(crate) market_opportunity: i32,
    pub(crate) execution_feasibility: i32,
    pub(crate) differentiation: i32,
    pub(crate) monetization_strength: i32,
    pub(crate) risk_score: i32,
}

impl SubScores {
    /// Build a sub-score tuple, rejecting any value outside `0..=100`.
    pub fn new(
        market_opportunity: i32,
        execution_feasibility: i32,
        differentiation: i32,
        monetization_strength: i32,
        risk_score: i32,
    ) -> Result<Self, CoreError> {
        let fields = [
            ("market_opportunity", market_opportunity),
            ("execution_feasibility", execution_feasibility),
            ("differentiation", differentiation),
            ("monetization_strength", monetization_strength),
            ("risk_score", risk_score),
        ];
        for (name, value) in fields {
            validate_score(value, name)?;
        }
        Ok(Self {
            market_opportunity,
            execution_feasibility,
            differentiation,
            monetization_strength,
            risk_score,
        })
    }

    pub fn market_opportunity(&self) -> i32 {
        self.market_opportunity
    }

    pub fn execution_feasibility(&self) -> i32 {
        self.execution_feasibility
    }

    pub fn differentiation(&self) -> i32 {
        self.differentiation
    }

    pub fn monetization_strength(&self) -> i32 {
        self.monetization_strength
    }

    pub fn risk_score(&self) -> i32 {
        self.risk_score
    }
}

impl TryFrom<RawSubScores> for SubScores {
    type Error = CoreError;

    fn try_from(raw: RawSubScores) -> Result<Self, Self::Error> {
        let narrow = |value: i64, name: &str| {
            i32::try_from(value).map_err(|_| {
                CoreError::Validation(format!(
                    "{name} must be between {MIN_SCORE} and {MAX_SCORE}, got {value}"
                ))
            })
        };
        Self::new(
            narrow(raw.market_opportunity, "market_opportunity")?,
            narrow(raw.execution_feasibility, "execution_feasibility")?,
            narrow(raw.differentiation, "differentiation")?,
            narrow(raw.monetization_strength, "monetization_strength")?,
            narrow(raw.risk_score, "risk_score")?,
        )
    }
}

/// Validate that a single sub-score is within `0..=100`.
pub fn validate_score(value: i32, name: &str) -> Result<(), CoreError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between {MIN_SCORE} and {MAX_SCORE}, got {value}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Risk tier
// ---------------------------------------------------------------------------

/// Risk exposure level derived from the numeric risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Return the string representation stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl std::str::FromStr for RiskTier {
    type Err = CoreError;

    /// Parse a stored tier name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Moderate" => Ok(Self::Moderate),
            "High" => Ok(Self::High),
            _ => Err(CoreError::Validation(format!(
                "Invalid risk tier '{s}'. Must be one of: Low, Moderate, High"
            ))),
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Scoring functions
// ---------------------------------------------------------------------------

/// Weighted composite of the five sub-scores, rounded half-up to an integer.
///
/// Always within `0..=100` because every term is bounded and the weights
/// sum to 100%.
pub fn composite_index(scores: &SubScores) -> i32 {
    let weighted = WEIGHT_MARKET_OPPORTUNITY * scores.market_opportunity
        + WEIGHT_EXECUTION_FEASIBILITY * scores.execution_feasibility
        + WEIGHT_DIFFERENTIATION * scores.differentiation
        + WEIGHT_MONETIZATION_STRENGTH * scores.monetization_strength
        + WEIGHT_INVERTED_RISK * (MAX_SCORE - scores.risk_score);

    (weighted + 50) / 100
}

/// Classify a risk score. Boundaries are inclusive on the lower tier.
pub fn risk_tier(risk_score: i32) -> RiskTier {
    if risk_score <= LOW_RISK_MAX {
        RiskTier::Low
    } else if risk_score <= MODERATE_RISK_MAX {
        RiskTier::Moderate
    } else {
        RiskTier::High
    }
}

/// Composite index and tier computed together from one score tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viability {
    pub startup_viability_index: i32,
    pub risk_exposure_level: RiskTier,
}

impl Viability {
    pub fn from_scores(scores: &SubScores) -> Self {
        Self {
            startup_viability_index: composite_index(scores),
            risk_exposure_level: risk_tier(scores.risk_score),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
