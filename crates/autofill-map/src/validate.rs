//! Shape checks for candidate profile values.
//!
//! Independent of the mapping table: rules are keyed by profile field name
//! and never change at runtime.

use std::sync::LazyLock;

use autofill_model::ValueCheck;
use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid email regex")
});
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[1-9]?[\d\s\-().]{7,15}$").expect("Invalid phone regex")
});
static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("Invalid URL regex"));
/// US ZIP / ZIP+4, or Canadian postal code.
static POSTAL_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{5}(-\d{4})?$|^[A-Z]\d[A-Z]\s?\d[A-Z]\d$").expect("Invalid postal code regex")
});
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("Invalid year regex"));
static GPA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d\.\d{1,2}$").expect("Invalid GPA regex"));

/// A value-shape rule registered for one or more profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    Email,
    Phone,
    Url,
    PostalCode,
    Year,
    Gpa,
}

impl ValueRule {
    /// The rule registered for `profile_field`, if any.
    pub fn for_profile_field(profile_field: &str) -> Option<Self> {
        match profile_field {
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "linkedin" | "website" | "github" => Some(Self::Url),
            "zipCode" => Some(Self::PostalCode),
            "graduationYear" | "startYear" | "endYear" => Some(Self::Year),
            "gpa" => Some(Self::Gpa),
            _ => None,
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::Email => &EMAIL,
            Self::Phone => &PHONE,
            Self::Url => &URL,
            Self::PostalCode => &POSTAL_CODE,
            Self::Year => &YEAR,
            Self::Gpa => &GPA,
        }
    }

    pub fn failure_reason(&self) -> &'static str {
        match self {
            Self::Email => "Invalid email format",
            Self::Phone => "Invalid phone number format",
            Self::Url => "Invalid URL format",
            Self::PostalCode => "Invalid ZIP/postal code format",
            Self::Year => "Invalid year format (should be 4 digits)",
            Self::Gpa => "Invalid GPA format (should be like 3.75)",
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        self.pattern().is_match(value)
    }
}

/// Checks `value` against the rule for `profile_field`.
///
/// Empty or whitespace-only values are valid, as are values for profile
/// fields without a rule. Values are trimmed before checking.
pub fn validate_field_value(profile_field: &str, value: &str) -> ValueCheck {
    let value = value.trim();
    if value.is_empty() {
        return ValueCheck::valid();
    }
    match ValueRule::for_profile_field(profile_field) {
        Some(rule) if !rule.matches(value) => ValueCheck::invalid(rule.failure_reason()),
        _ => ValueCheck::valid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_always_valid() {
        assert!(validate_field_value("email", "").is_valid());
        assert!(validate_field_value("email", "   \t").is_valid());
    }

    #[test]
    fn unregistered_fields_are_always_valid() {
        assert!(validate_field_value("summary", "anything at all").is_valid());
    }

    #[test]
    fn email_rule() {
        assert!(validate_field_value("email", " jane.doe+jobs@example.co.uk ").is_valid());
        let check = validate_field_value("email", "jane@localhost");
        assert!(!check.is_valid());
        assert_eq!(check.reason(), "Invalid email format");
    }

    #[test]
    fn phone_rule() {
        assert!(validate_field_value("phone", "+1 (555) 123-4567").is_valid());
        assert!(!validate_field_value("phone", "call me").is_valid());
        assert!(!validate_field_value("phone", "123").is_valid());
    }

    #[test]
    fn url_rule_covers_profile_links() {
        for field in ["linkedin", "website", "github"] {
            assert!(validate_field_value(field, "https://example.com/me").is_valid());
            assert!(!validate_field_value(field, "example.com/me").is_valid());
        }
    }

    #[test]
    fn postal_code_rule() {
        assert!(validate_field_value("zipCode", "94103").is_valid());
        assert!(validate_field_value("zipCode", "94103-1234").is_valid());
        assert!(validate_field_value("zipCode", "K1A 0B1").is_valid());
        assert!(!validate_field_value("zipCode", "9410").is_valid());
    }

    #[test]
    fn year_and_gpa_rules() {
        assert!(validate_field_value("graduationYear", "2021").is_valid());
        assert!(!validate_field_value("endYear", "21").is_valid());
        assert!(validate_field_value("gpa", "3.75").is_valid());
        assert!(!validate_field_value("gpa", "3.756").is_valid());
        assert_eq!(
            validate_field_value("gpa", "A+").reason(),
            "Invalid GPA format (should be like 3.75)"
        );
    }
}
