//! Batch analysis report.
//!
//! Built fresh for every analysis call and never persisted; the CLI renders
//! it as a table or as JSON.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::field::{FieldAttributes, FormField};
use crate::mapping::MatchResult;

/// A field the pipeline could not map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmappedField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub attributes: FieldAttributes,
}

/// Batch counters. `total == mapped + unmapped` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStatistics {
    pub total: usize,
    pub mapped: usize,
    pub unmapped: usize,
}

impl AnalysisStatistics {
    /// Share of mapped fields (0.0 for an empty batch).
    pub fn mapped_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.mapped as f64 / self.total as f64
    }
}

/// An improvement hint derived after a batch has been analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// Some fields could not be mapped.
    UnmappedFields { unmapped: usize, total: usize },
    /// Some mappings scored below the low-confidence threshold.
    /// `fields` lists at most the first three; `count` is the full number.
    LowConfidence { count: usize, fields: Vec<String> },
    /// Tokens recurring across unmapped field names.
    CommonPatterns { patterns: Vec<String> },
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmappedFields { unmapped, total } => {
                write!(f, "Found {unmapped} unmapped fields out of {total} total")
            }
            Self::LowConfidence { count, fields } => {
                write!(
                    f,
                    "Review {count} mappings with low confidence: {}",
                    fields.join(", ")
                )?;
                if *count > fields.len() {
                    write!(f, " (and {} more)", count - fields.len())?;
                }
                Ok(())
            }
            Self::CommonPatterns { patterns } => write!(
                f,
                "Consider adding mappings for common patterns: {}",
                patterns.join(", ")
            ),
        }
    }
}

/// Aggregate result of analyzing a batch of form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Per-field results in input order.
    pub results: Vec<MatchResult>,
    /// Field name -> profile field, for mapped fields, in input order.
    pub mapped_fields: IndexMap<String, String>,
    /// Fields that could not be mapped, in input order.
    pub unmapped_fields: Vec<UnmappedField>,
    /// Field name -> confidence, for mapped fields, in input order.
    pub confidence_scores: IndexMap<String, f64>,
    pub statistics: AnalysisStatistics,
    pub suggestions: Vec<Suggestion>,
}

impl AnalysisReport {
    /// Records one field's result and updates the counters.
    pub fn record(&mut self, result: MatchResult, field: &FormField) {
        match &result.mapped_profile_field {
            Some(profile_field) => {
                self.mapped_fields
                    .insert(result.field_name.clone(), profile_field.clone());
                self.confidence_scores
                    .insert(result.field_name.clone(), result.confidence);
                self.statistics.mapped += 1;
            }
            None => {
                self.unmapped_fields.push(UnmappedField {
                    name: result.field_name.clone(),
                    field_type: field.field_type.clone(),
                    attributes: field.effective_attributes(),
                });
                self.statistics.unmapped += 1;
            }
        }
        self.statistics.total += 1;
        self.results.push(result);
    }

    /// Mapped fields whose confidence is below `threshold`, in input order.
    pub fn low_confidence_fields(&self, threshold: f64) -> Vec<&str> {
        self.confidence_scores
            .iter()
            .filter(|(_, confidence)| **confidence < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn mean_confidence(&self) -> Option<f64> {
        if self.confidence_scores.is_empty() {
            return None;
        }
        let sum: f64 = self.confidence_scores.values().sum();
        Some(sum / self.confidence_scores.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MatchStrategy;

    #[test]
    fn low_confidence_message_notes_remaining_fields() {
        let suggestion = Suggestion::LowConfidence {
            count: 5,
            fields: vec!["a".into(), "b".into(), "c".into()],
        };
        assert_eq!(
            suggestion.to_string(),
            "Review 5 mappings with low confidence: a, b, c (and 2 more)"
        );

        let exact = Suggestion::LowConfidence {
            count: 1,
            fields: vec!["fname2".into()],
        };
        assert_eq!(
            exact.to_string(),
            "Review 1 mappings with low confidence: fname2"
        );
    }

    #[test]
    fn low_confidence_fields_keep_input_order() {
        let mut report = AnalysisReport::default();
        for (name, confidence) in [("zz_fname2", 0.55), ("mm_email", 1.0), ("aa_phone2", 0.6)] {
            let result = MatchResult::matched(name, "x", confidence, MatchStrategy::Fuzzy);
            report.record(result, &FormField::named(name));
        }
        report.record(MatchResult::unmatched("bb_misc"), &FormField::named("bb_misc"));

        assert_eq!(report.low_confidence_fields(0.7), ["zz_fname2", "aa_phone2"]);
        let mapped: Vec<&str> = report.mapped_fields.keys().map(String::as_str).collect();
        assert_eq!(mapped, ["zz_fname2", "mm_email", "aa_phone2"]);
        assert_eq!(report.statistics.total, 4);
    }

    #[test]
    fn mapped_ratio_handles_empty_batch() {
        assert_eq!(AnalysisStatistics::default().mapped_ratio(), 0.0);
        let stats = AnalysisStatistics {
            total: 4,
            mapped: 3,
            unmapped: 1,
        };
        assert!((stats.mapped_ratio() - 0.75).abs() < f64::EPSILON);
    }
}
