//! Integration tests for the command layer.

use std::fs;
use std::path::PathBuf;

use autofill_cli::commands::{
    build_engine, read_fields, run_analyze, run_import, run_map, run_test, run_validate,
};
use autofill_map::MapperConfig;
use autofill_model::{FormField, MatchStrategy, Suggestion};
use tempfile::tempdir;

const FORM: &str = r#"{
    "fields": [
        { "name": "applicant_email", "type": "email", "placeholder": "E-mail" },
        { "id": "fname2" },
        { "name": "q_17", "attributes": { "label": "Phone Number" } },
        { "name": "xyz-1001" },
        { "name": "xyz-2002", "type": "textarea" }
    ]
}"#;

#[test]
fn reads_both_document_shapes() {
    let dir = tempdir().unwrap();
    let wrapped = dir.path().join("form.json");
    let bare = dir.path().join("fields.json");
    fs::write(&wrapped, FORM).unwrap();
    fs::write(&bare, r#"[{ "name": "email" }, { "id": "zip" }]"#).unwrap();

    let fields = read_fields(&wrapped).unwrap();
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[0].field_type, "email");
    assert_eq!(fields[0].inline_attributes.placeholder.as_deref(), Some("E-mail"));
    assert_eq!(fields[1].identifier(), "fname2");
    assert_eq!(fields[2].attributes.label.as_deref(), Some("Phone Number"));

    let fields = read_fields(&bare).unwrap();
    assert_eq!(fields[1].field_type, "text");
    assert_eq!(fields[1].identifier(), "zip");
}

#[test]
fn analyze_file_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("form.json");
    fs::write(&input, FORM).unwrap();

    let engine = build_engine(MapperConfig::default(), &[]).unwrap();
    let report = run_analyze(&engine, &input).unwrap();

    assert_eq!(report.statistics.total, 5);
    assert_eq!(report.statistics.mapped, 3);
    assert_eq!(report.confidence_scores.get("applicant_email"), Some(&1.0));
    assert_eq!(
        report.mapped_fields.get("q_17").map(String::as_str),
        Some("phone")
    );
    assert_eq!(report.unmapped_fields.len(), 2);
    assert_eq!(report.unmapped_fields[1].field_type, "textarea");
    assert!(report.suggestions.contains(&Suggestion::CommonPatterns {
        patterns: vec!["xyz".to_string()],
    }));
}

#[test]
fn analyze_reports_unreadable_input() {
    let dir = tempdir().unwrap();
    let engine = build_engine(MapperConfig::default(), &[]).unwrap();
    let err = run_analyze(&engine, &dir.path().join("missing.json")).unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));
}

#[test]
fn map_with_output_persists_for_next_run() {
    let dir = tempdir().unwrap();
    let saved = dir.path().join("mappings.json");

    let mut engine = build_engine(MapperConfig::default(), &[]).unwrap();
    assert!(run_map(&mut engine, "Desired Pay Grade", "salary", Some(&saved)).unwrap());

    let next_run = build_engine(MapperConfig::default(), &[saved]).unwrap();
    assert_eq!(
        next_run.match_field("desired_pay_grade", None).as_deref(),
        Some("salary")
    );
}

#[test]
fn configured_mapping_files_are_loaded_before_extras() {
    let dir = tempdir().unwrap();
    let configured = dir.path().join("team.json");
    let extra = dir.path().join("extra.json");
    fs::write(&configured, r#"{"pronouns": ["pronouns"]}"#).unwrap();
    fs::write(&extra, r#"{"pronouns": ["preferred_pronouns"]}"#).unwrap();

    let config = MapperConfig {
        mapping_files: vec![configured],
        ..MapperConfig::default()
    };
    let engine = build_engine(config, &[extra]).unwrap();
    assert_eq!(
        engine.table().variants("pronouns"),
        ["pronouns".to_string(), "preferred_pronouns".to_string()]
    );
}

#[test]
fn missing_extra_mapping_file_fails_the_build() {
    let missing = PathBuf::from("/nonexistent/field-mapper/mappings.json");
    let err = build_engine(MapperConfig::default(), &[missing]).unwrap_err();
    assert!(format!("{err:#}").contains("mapping file not found"));
}

#[test]
fn import_writes_merged_table() {
    let dir = tempdir().unwrap();
    let extra = dir.path().join("extra.json");
    let merged = dir.path().join("out").join("merged.json");
    fs::write(&extra, r#"{"email": ["inbox_address", "email"]}"#).unwrap();

    let mut engine = build_engine(MapperConfig::default(), &[]).unwrap();
    let summary = run_import(&mut engine, &extra, Some(&merged)).unwrap();
    assert_eq!(summary.added_variants, 1);

    let written: serde_json::Value = serde_json::from_slice(&fs::read(&merged).unwrap()).unwrap();
    let email = written["email"].as_array().unwrap();
    assert!(email.iter().any(|v| v == "inbox_address"));
}

#[test]
fn test_command_explains_attribute_match() {
    let engine = build_engine(MapperConfig::default(), &[]).unwrap();
    let field = FormField::named("q_17").with_attribute("label", "Phone Number");
    let trace = run_test(&engine, &field);

    let outcome = trace.outcome.unwrap();
    assert_eq!(outcome.strategy, MatchStrategy::Attribute);
    assert_eq!(outcome.attribute, Some("label"));
    let score = trace.score.unwrap();
    assert_eq!(score.score, trace.result.confidence);
    assert!(score.explain().contains("label"));
}

#[test]
fn test_command_reports_no_match() {
    let engine = build_engine(MapperConfig::default(), &[]).unwrap();
    let trace = run_test(&engine, &FormField::named("xyz-1001"));
    assert!(trace.outcome.is_none());
    assert!(trace.score.is_none());
    assert!(!trace.result.is_mapped());
}

#[test]
fn validate_command_uses_profile_rules() {
    assert!(run_validate("email", "jane@example.com").is_valid());
    let check = run_validate("zipCode", "ABCDE");
    assert!(!check.is_valid());
    assert_eq!(check.reason(), "Invalid ZIP/postal code format");
}
