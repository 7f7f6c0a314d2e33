//! Batch analysis of form fields.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use autofill_model::{AnalysisReport, FormField, MatchResult, Suggestion};
use regex::Regex;
use tracing::{debug, info, info_span};

use crate::matcher::Matcher;
use crate::score::Scorer;

/// Field names listed per suggestion.
const MAX_LISTED: usize = 3;
/// Tokens shorter than this are ignored when mining patterns.
const MIN_PATTERN_CHARS: usize = 3;

static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid word regex"));

/// Runs matcher and scorer over a batch and derives suggestions.
///
/// Read-only with respect to the mapping table.
pub struct Analyzer<'a> {
    matcher: Matcher<'a>,
    scorer: Scorer<'a>,
    low_confidence_threshold: f64,
}

impl<'a> Analyzer<'a> {
    pub fn new(matcher: Matcher<'a>, scorer: Scorer<'a>, low_confidence_threshold: f64) -> Self {
        Self {
            matcher,
            scorer,
            low_confidence_threshold,
        }
    }

    /// Maps and scores a single field.
    pub fn evaluate(&self, field: &FormField) -> MatchResult {
        let name = field.identifier();
        let attributes = field.effective_attributes();
        match self.matcher.resolve(name, Some(&attributes)) {
            Some(outcome) => {
                let confidence =
                    self.scorer
                        .confidence(name, &outcome.profile_field, Some(&attributes));
                debug!(
                    field = %name,
                    profile_field = %outcome.profile_field,
                    strategy = %outcome.strategy,
                    confidence,
                    "field mapped"
                );
                MatchResult::matched(name, outcome.profile_field, confidence, outcome.strategy)
            }
            None => {
                debug!(field = %name, "field unmapped");
                MatchResult::unmatched(name)
            }
        }
    }

    /// Analyzes `fields` in input order.
    pub fn analyze(&self, fields: &[FormField]) -> AnalysisReport {
        let span = info_span!("analyze", field_count = fields.len());
        let _guard = span.enter();

        let mut report = AnalysisReport::default();
        for field in fields {
            report.record(self.evaluate(field), field);
        }
        report.suggestions = self.suggestions(&report);

        info!(
            total = report.statistics.total,
            mapped = report.statistics.mapped,
            unmapped = report.statistics.unmapped,
            suggestions = report.suggestions.len(),
            "analysis complete"
        );
        report
    }

    fn suggestions(&self, report: &AnalysisReport) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();
        let stats = report.statistics;

        if stats.unmapped > 0 {
            suggestions.push(Suggestion::UnmappedFields {
                unmapped: stats.unmapped,
                total: stats.total,
            });
        }

        let low_confidence = report.low_confidence_fields(self.low_confidence_threshold);
        if !low_confidence.is_empty() {
            suggestions.push(Suggestion::LowConfidence {
                count: low_confidence.len(),
                fields: low_confidence
                    .iter()
                    .take(MAX_LISTED)
                    .map(|name| (*name).to_string())
                    .collect(),
            });
        }

        let patterns = find_common_patterns(report.unmapped_fields.iter().map(|f| f.name.as_str()));
        if !patterns.is_empty() {
            suggestions.push(Suggestion::CommonPatterns {
                patterns: patterns.into_iter().take(MAX_LISTED).collect(),
            });
        }

        suggestions
    }
}

/// Word tokens (at least three characters, lowercased) occurring more than
/// once across `names`, in first-seen order.
pub fn find_common_patterns<'n>(names: impl IntoIterator<Item = &'n str>) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for name in names {
        let lowered = name.to_lowercase();
        for token in WORD_RUN.find_iter(&lowered) {
            let token = token.as_str();
            if token.chars().count() < MIN_PATTERN_CHARS {
                continue;
            }
            let count = counts.entry(token.to_string()).or_insert(0);
            if *count == 0 {
                order.push(token.to_string());
            }
            *count += 1;
        }
    }
    order
        .into_iter()
        .filter(|token| counts.get(token).is_some_and(|count| *count > 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_keep_first_seen_order() {
        let names = ["Ref-Code", "xyz-1", "ref code", "xyz-2", "ab ab"];
        assert_eq!(find_common_patterns(names), vec!["ref", "code", "xyz"]);
    }

    #[test]
    fn underscores_join_tokens() {
        // `\w` includes `_`, so snake_case names are single tokens.
        let names = ["xyz_one", "xyz_two"];
        assert!(find_common_patterns(names).is_empty());
    }

    #[test]
    fn no_patterns_for_unique_tokens() {
        assert!(find_common_patterns(["alpha", "beta", "gamma"]).is_empty());
        assert!(find_common_patterns(std::iter::empty()).is_empty());
    }
}
