//! Confidence scoring for accepted mappings.
//!
//! Scoring runs after the matcher has chosen a profile field and never
//! changes that choice; it only reports how far the choice can be trusted.
//!
//! - exact variant of the mapped field: 0.8
//! - otherwise: best similarity against the mapped field's variants x 0.6
//! - one attribute value normalizing to a variant of the mapped field: +0.2
//!
//! The sum is capped at 1.0.

use std::fmt;

use autofill_model::FieldAttributes;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_field_name;
use crate::similarity::Similarity;
use crate::table::MappingTable;

const EXACT_MATCH_WEIGHT: f64 = 0.8;
const FUZZY_MATCH_WEIGHT: f64 = 0.6;
const ATTRIBUTE_MATCH_BONUS: f64 = 0.2;
const MAX_CONFIDENCE: f64 = 1.0;

const HIGH_CONFIDENCE: f64 = 0.9;
const MEDIUM_CONFIDENCE: f64 = 0.7;

/// Display bucket for a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Below 0.7; flagged for review.
    Low,
    /// 0.7 up to 0.9.
    Medium,
    /// 0.9 and above.
    High,
}

impl ConfidenceLevel {
    pub fn categorize(confidence: f64) -> Self {
        if confidence >= HIGH_CONFIDENCE {
            Self::High
        } else if confidence >= MEDIUM_CONFIDENCE {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "high confidence - likely correct",
            Self::Medium => "medium confidence - should review",
            Self::Low => "low confidence - needs verification",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        })
    }
}

/// A component contributing to the final score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreComponent {
    pub name: &'static str,
    pub value: f64,
    pub description: String,
}

/// Confidence for one mapping plus its breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldScore {
    /// Final confidence in [0, 1].
    pub score: f64,
    pub explanation: Vec<ScoreComponent>,
}

impl FieldScore {
    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::categorize(self.score)
    }

    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        self.explanation
            .iter()
            .map(|c| format!("{}: +{:.2} ({})", c.name, c.value, c.description))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Scores mappings against a borrowed [`MappingTable`].
///
/// Uses the same similarity as the matcher, restricted to the mapped field's
/// own variants.
pub struct Scorer<'a> {
    table: &'a MappingTable,
    similarity: &'a dyn Similarity,
}

impl<'a> Scorer<'a> {
    pub fn new(table: &'a MappingTable, similarity: &'a dyn Similarity) -> Self {
        Self { table, similarity }
    }

    /// Confidence in [0, 1] that `field_name` maps to `profile_field`.
    pub fn confidence(
        &self,
        field_name: &str,
        profile_field: &str,
        attributes: Option<&FieldAttributes>,
    ) -> f64 {
        self.score(field_name, profile_field, attributes).score
    }

    pub fn score(
        &self,
        field_name: &str,
        profile_field: &str,
        attributes: Option<&FieldAttributes>,
    ) -> FieldScore {
        let mut components = Vec::new();
        let normalized = normalize_field_name(field_name);

        let base = if self.table.contains_variant(profile_field, &normalized) {
            components.push(ScoreComponent {
                name: "Exact variant",
                value: EXACT_MATCH_WEIGHT,
                description: format!("'{normalized}' is a known variant of {profile_field}"),
            });
            EXACT_MATCH_WEIGHT
        } else {
            let (variant, ratio) = self.best_variant(&normalized, profile_field);
            let value = ratio * FUZZY_MATCH_WEIGHT;
            components.push(ScoreComponent {
                name: "Name similarity",
                value,
                description: match variant {
                    Some(variant) => format!("'{normalized}' vs '{variant}' {:.0}%", ratio * 100.0),
                    None => format!("no variants of {profile_field} to compare"),
                },
            });
            value
        };

        let mut score = base;
        if let Some(attributes) = attributes {
            for (attribute, value) in attributes.iter() {
                let cleaned = normalize_field_name(value);
                if self.table.contains_variant(profile_field, &cleaned) {
                    score += ATTRIBUTE_MATCH_BONUS;
                    components.push(ScoreComponent {
                        name: "Attribute match",
                        value: ATTRIBUTE_MATCH_BONUS,
                        description: format!("{attribute} '{cleaned}' is a known variant"),
                    });
                    break;
                }
            }
        }

        FieldScore {
            score: score.min(MAX_CONFIDENCE),
            explanation: components,
        }
    }

    /// Best similarity between `normalized` and the variants of `profile_field`.
    fn best_variant(&self, normalized: &str, profile_field: &str) -> (Option<&'a str>, f64) {
        let mut best: (Option<&'a str>, f64) = (None, 0.0);
        if normalized.is_empty() {
            return best;
        }
        for variant in self.table.variants(profile_field) {
            let ratio = self.similarity.similarity(normalized, variant);
            if best.0.is_none() || ratio > best.1 {
                best = (Some(variant.as_str()), ratio);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::IndelSimilarity;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn exact_without_bonus_is_point_eight() {
        let table = MappingTable::builtin();
        let scorer = Scorer::new(&table, &IndelSimilarity);
        assert_eq!(scorer.confidence("applicant_first_name", "firstName", None), 0.8);
    }

    #[test]
    fn exact_with_attribute_bonus_caps_at_one() {
        let table = MappingTable::builtin();
        let scorer = Scorer::new(&table, &IndelSimilarity);
        let mut attributes = FieldAttributes::default();
        attributes.set("placeholder", "E-mail");
        attributes.set("label", "Email Address");
        let score = scorer.score("email", "email", Some(&attributes));
        assert_eq!(score.score, 1.0);
        assert_eq!(score.level(), ConfidenceLevel::High);
        // Only one bonus, from the first matching attribute.
        assert_eq!(score.explanation.len(), 2);
        assert!(score.explain().contains("placeholder"));
    }

    #[test]
    fn fuzzy_uses_only_mapped_field_variants() {
        let table = MappingTable::builtin();
        let scorer = Scorer::new(&table, &IndelSimilarity);
        let score = scorer.confidence("fname2", "firstName", None);
        assert!(approx(score, 10.0 / 11.0 * 0.6), "got {score}");
        assert_eq!(ConfidenceLevel::categorize(score), ConfidenceLevel::Low);
    }

    #[test]
    fn unknown_profile_field_scores_zero() {
        let table = MappingTable::builtin();
        let scorer = Scorer::new(&table, &IndelSimilarity);
        assert_eq!(scorer.confidence("email", "faxNumber", None), 0.0);
    }
}
