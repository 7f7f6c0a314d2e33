//! Field name resolution: exact lookup, then fuzzy similarity, then
//! attribute context.

use autofill_model::{FieldAttributes, MatchStrategy};
use tracing::trace;

use crate::normalize::normalize_field_name;
use crate::similarity::Similarity;
use crate::table::MappingTable;

/// A resolved profile field and how it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub profile_field: String,
    pub strategy: MatchStrategy,
    /// Similarity of the winning variant (1.0 for exact matches).
    pub ratio: f64,
    /// Attribute that resolved the field, for [`MatchStrategy::Attribute`].
    pub attribute: Option<&'static str>,
}

/// Resolves field names against a borrowed [`MappingTable`].
///
/// Resolution is bounded: the field name is tried first, then each attribute
/// value once. Attribute values never recurse into further attributes.
pub struct Matcher<'a> {
    table: &'a MappingTable,
    similarity: &'a dyn Similarity,
    threshold: f64,
}

impl<'a> Matcher<'a> {
    pub fn new(table: &'a MappingTable, similarity: &'a dyn Similarity, threshold: f64) -> Self {
        Self {
            table,
            similarity,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The profile field for `field_name`, if any strategy resolves it.
    pub fn match_field(
        &self,
        field_name: &str,
        attributes: Option<&FieldAttributes>,
    ) -> Option<String> {
        self.resolve(field_name, attributes)
            .map(|outcome| outcome.profile_field)
    }

    /// Runs exact, fuzzy, then attribute matching; first success wins.
    pub fn resolve(
        &self,
        field_name: &str,
        attributes: Option<&FieldAttributes>,
    ) -> Option<MatchOutcome> {
        if let Some(outcome) = self.resolve_name(field_name) {
            return Some(outcome);
        }
        let attributes = attributes?;
        for (attribute, value) in attributes.iter() {
            let normalized = normalize_field_name(value);
            if let Some(outcome) = self.resolve_name(&normalized) {
                return Some(MatchOutcome {
                    strategy: MatchStrategy::Attribute,
                    attribute: Some(attribute),
                    ..outcome
                });
            }
        }
        None
    }

    /// Exact then fuzzy matching on a single name. No attribute fallback.
    fn resolve_name(&self, raw: &str) -> Option<MatchOutcome> {
        let normalized = normalize_field_name(raw);
        if normalized.is_empty() {
            return None;
        }
        if let Some(profile_field) = self.table.find_exact(&normalized) {
            return Some(MatchOutcome {
                profile_field: profile_field.to_string(),
                strategy: MatchStrategy::Exact,
                ratio: 1.0,
                attribute: None,
            });
        }
        let (profile_field, ratio) = self.best_fuzzy(&normalized)?;
        if ratio < self.threshold {
            trace!(name = %normalized, best = %profile_field, ratio, "fuzzy match below threshold");
            return None;
        }
        Some(MatchOutcome {
            profile_field: profile_field.to_string(),
            strategy: MatchStrategy::Fuzzy,
            ratio,
            attribute: None,
        })
    }

    /// Best `(profile_field, ratio)` across every stored variant.
    ///
    /// Ties keep the first candidate in table order.
    pub fn best_fuzzy(&self, normalized: &str) -> Option<(&'a str, f64)> {
        if normalized.is_empty() {
            return None;
        }
        let mut best: Option<(&'a str, f64)> = None;
        for (profile_field, variants) in self.table.iter() {
            for variant in variants {
                let ratio = self.similarity.similarity(normalized, variant);
                if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
                    best = Some((profile_field, ratio));
                }
            }
        }
        best
    }
}
