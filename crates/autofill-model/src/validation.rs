use serde::{Deserialize, Serialize};

/// Outcome of checking a candidate value against a profile field's rule.
///
/// Invalid values are an expected outcome, so this is a plain record rather
/// than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCheck {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValueCheck {
    pub fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The failure reason, or an empty string for valid values.
    pub fn reason(&self) -> &str {
        self.reason.as_deref().unwrap_or_default()
    }
}
