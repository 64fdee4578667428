//! Respondent identity captured at the greeting turn.

use serde::{Deserialize, Serialize};

/// Who is being interviewed.
///
/// Built once from the first turn's identity parse and read-only afterwards.
/// Fields arrive pre-sanitized from the interpreter, so empty strings are the
/// only degenerate form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentProfile {
    name: String,
    trade: String,
    business_stage: Option<String>,
}

impl RespondentProfile {
    /// Creates a profile from already-sanitized identity fields.
    pub fn new(
        name: impl Into<String>,
        trade: impl Into<String>,
        business_stage: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            trade: trade.into(),
            business_stage,
        }
    }

    /// Returns the respondent's name, possibly empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the respondent's trade, possibly empty.
    pub fn trade(&self) -> &str {
        &self.trade
    }

    /// Returns the free-form business-stage marker, if one was given.
    pub fn business_stage(&self) -> Option<&str> {
        self.business_stage.as_deref()
    }

    /// Name to address the respondent by, with a fallback when none was
    /// given.
    pub fn salutation(&self) -> &str {
        if self.name.is_empty() {
            "there"
        } else {
            &self.name
        }
    }
}
