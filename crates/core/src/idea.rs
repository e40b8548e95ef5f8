//! Startup idea input: normalization and field-length validation.
//!
//! All four fields are trimmed before their lengths are checked, and lengths
//! are counted in characters rather than bytes.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Minimum idea title length in characters.
pub const MIN_TITLE_LEN: u64 = 3;
/// Maximum idea title length in characters.
pub const MAX_TITLE_LEN: u64 = 100;
/// Minimum idea description length in characters.
pub const MIN_DESCRIPTION_LEN: u64 = 10;
/// Maximum idea description length in characters.
pub const MAX_DESCRIPTION_LEN: u64 = 2000;
/// Minimum industry length in characters.
pub const MIN_INDUSTRY_LEN: u64 = 2;
/// Maximum industry length in characters.
pub const MAX_INDUSTRY_LEN: u64 = 50;
/// Minimum target market length in characters.
pub const MIN_TARGET_MARKET_LEN: u64 = 2;
/// Maximum target market length in characters.
pub const MAX_TARGET_MARKET_LEN: u64 = 100;

/// The four business fields describing a startup idea.
///
/// Construct through [`IdeaInput::normalized`] to get trimmed, validated
/// values; the raw struct is what the HTTP layer deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct IdeaInput {
    #[serde(alias = "ideaTitle")]
    #[validate(length(min = MIN_TITLE_LEN, max = MAX_TITLE_LEN))]
    pub idea_title: String,

    #[serde(alias = "ideaDescription")]
    #[validate(length(min = MIN_DESCRIPTION_LEN, max = MAX_DESCRIPTION_LEN))]
    pub idea_description: String,

    #[validate(length(min = MIN_INDUSTRY_LEN, max = MAX_INDUSTRY_LEN))]
    pub industry: String,

    #[serde(alias = "targetMarket")]
    #[validate(length(min = MIN_TARGET_MARKET_LEN, max = MAX_TARGET_MARKET_LEN))]
    pub target_market: String,
}

impl IdeaInput {
    /// Trim every field and validate the trimmed lengths.
    pub fn normalized(self) -> Result<Self, CoreError> {
        let trimmed = Self {
            idea_title: self.idea_title.trim().to_string(),
            idea_description: self.idea_description.trim().to_string(),
            industry: self.industry.trim().to_string(),
            target_market: self.target_market.trim().to_string(),
        };
        trimmed.validate().map_err(validation_error)?;
        Ok(trimmed)
    }
}

/// Flatten validator's per-field errors into a single readable message.
fn validation_error(errors: ValidationErrors) -> CoreError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let (min, max) = field_bounds(field);
            let code = errs.first().map(|e| e.code.as_ref()).unwrap_or("invalid");
            format!("{field} must be between {min} and {max} characters ({code})")
        })
        .collect();
    messages.sort();
    CoreError::Validation(messages.join("; "))
}

fn field_bounds(field: &str) -> (u64, u64) {
    match field {
        "idea_title" => (MIN_TITLE_LEN, MAX_TITLE_LEN),
        "idea_description" => (MIN_DESCRIPTION_LEN, MAX_DESCRIPTION_LEN),
        "industry" => (MIN_INDUSTRY_LEN, MAX_INDUSTRY_LEN),
        _ => (MIN_TARGET_MARKET_LEN, MAX_TARGET_MARKET_LEN),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
