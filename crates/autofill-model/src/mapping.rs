//! Per-field mapping outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a field was resolved to a profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The normalized name is a stored variant.
    Exact,
    /// The normalized name is similar enough to a stored variant.
    Fuzzy,
    /// An attribute value (placeholder, label, class, title) resolved instead.
    Attribute,
}

impl MatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
            Self::Attribute => "attribute",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mapping decision for one form field. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Field identifier as supplied by the caller (not normalized).
    pub field_name: String,
    /// Resolved profile field, if any.
    pub mapped_profile_field: Option<String>,
    /// Confidence in [0, 1]; 0 when unmapped.
    pub confidence: f64,
    /// Strategy that produced the mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<MatchStrategy>,
}

impl MatchResult {
    pub fn matched(
        field_name: impl Into<String>,
        profile_field: impl Into<String>,
        confidence: f64,
        strategy: MatchStrategy,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            mapped_profile_field: Some(profile_field.into()),
            confidence: confidence.clamp(0.0, 1.0),
            strategy: Some(strategy),
        }
    }

    pub fn unmatched(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            mapped_profile_field: None,
            confidence: 0.0,
            strategy: None,
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.mapped_profile_field.is_some()
    }
}
