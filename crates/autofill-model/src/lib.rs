pub mod field;
pub mod mapping;
pub mod report;
pub mod validation;

pub use field::{FieldAttributes, FormField};
pub use mapping::{MatchResult, MatchStrategy};
pub use report::{AnalysisReport, AnalysisStatistics, Suggestion, UnmappedField};
pub use validation::ValueCheck;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes() {
        let mut report = AnalysisReport::default();
        report.record(
            MatchResult::matched("email_address", "email", 0.8, MatchStrategy::Exact),
            &FormField::named("email_address"),
        );
        report.record(MatchResult::unmatched("xyz"), &FormField::named("xyz"));

        let json = serde_json::to_string(&report).expect("serialize report");
        let round: AnalysisReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.statistics.total, 2);
        assert_eq!(round.statistics.mapped, 1);
        assert_eq!(round.statistics.unmapped, 1);
        assert_eq!(
            round.mapped_fields.get("email_address").map(String::as_str),
            Some("email")
        );
        assert_eq!(round.unmapped_fields[0].name, "xyz");
    }
}
