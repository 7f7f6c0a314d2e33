use std::fs;

use autofill_map::{MappingEngine, MappingFileError, MappingTable, read_mapping_file};
use tempfile::tempdir;

const SAMPLE_NAMES: &[&str] = &[
    "email_address",
    "fname2",
    "Zip-Code",
    "xyz-7731",
    "Desired Pay Grade",
    "",
];

fn sample_results(engine: &MappingEngine) -> Vec<Option<String>> {
    SAMPLE_NAMES
        .iter()
        .map(|name| engine.match_field(name, None))
        .collect()
}

#[test]
fn export_then_import_preserves_matching() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mappings.json");

    let mut source = MappingEngine::new();
    source.add_custom_mapping("Desired Pay Grade", "salary");
    source.export_mappings(&path).unwrap();

    let mut restored = MappingEngine::new().with_table(MappingTable::new());
    let summary = restored.import_mappings(&path).unwrap();

    assert_eq!(summary.added_profiles, source.table().len());
    assert_eq!(summary.added_variants, source.table().variant_count());
    assert_eq!(restored.table(), source.table());
    assert_eq!(sample_results(&restored), sample_results(&source));
}

#[test]
fn export_writes_profile_to_variant_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("small.json");

    let mut table = MappingTable::new();
    table.insert_variant("firstName", "fname");
    table.insert_variant("email", "email");
    table.insert_variant("email", "E-mail");
    MappingEngine::new()
        .with_table(table)
        .export_mappings(&path)
        .unwrap();

    insta::assert_snapshot!(fs::read_to_string(&path).unwrap(), @r#"
    {
      "firstName": [
        "fname"
      ],
      "email": [
        "email",
        "e_mail"
      ]
    }
    "#);
}

#[test]
fn export_then_import_keeps_table_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ordered.json");

    let mut source = MappingEngine::new();
    source.add_custom_mapping("email", "Contact");
    source.add_custom_mapping("Desired Pay Grade", "salary");
    source.add_custom_mapping("preferred_pronouns", "aaa_pronouns");
    source.export_mappings(&path).unwrap();

    let mut restored = MappingEngine::new().with_table(MappingTable::new());
    restored.import_mappings(&path).unwrap();

    let source_order: Vec<&str> = source.table().profile_fields().collect();
    let restored_order: Vec<&str> = restored.table().profile_fields().collect();
    assert_eq!(restored_order, source_order);
    assert_eq!(source_order[0], "firstName");
    assert_eq!(&source_order[source_order.len() - 2..], ["Contact", "aaa_pronouns"]);
    assert!(restored.table().iter().eq(source.table().iter()));
    assert_eq!(
        restored.match_field("email", None).as_deref(),
        Some("email")
    );
}

#[test]
fn import_is_a_union_merge() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("extra.json");
    fs::write(
        &path,
        r#"{
            "email": ["email", "Inbox Address", ""],
            "pronouns": ["preferred_pronouns"]
        }"#,
    )
    .unwrap();

    let mut engine = MappingEngine::new();
    let before = engine.table().variant_count();
    let summary = engine.import_mappings(&path).unwrap();

    assert_eq!(summary.added_profiles, 1);
    assert_eq!(summary.added_variants, 2);
    assert_eq!(summary.skipped_empty, 1);
    assert_eq!(engine.table().variant_count(), before + 2);
    // Existing variants are kept in their original position.
    assert_eq!(engine.table().variants("email")[0], "email");
    assert_eq!(
        engine.match_field("inbox_address", None).as_deref(),
        Some("email")
    );
    assert_eq!(
        engine.match_field("preferred_pronouns", None).as_deref(),
        Some("pronouns")
    );
}

#[test]
fn missing_file_is_reported_and_table_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let mut engine = MappingEngine::new();
    let before = engine.table().clone();
    let err = engine.import_mappings(&path).unwrap_err();

    assert!(matches!(err, MappingFileError::NotFound { .. }));
    assert_eq!(engine.table(), &before);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"email": "not-a-list"}"#).unwrap();

    let err = read_mapping_file(&path).unwrap_err();
    assert!(matches!(err, MappingFileError::Parse { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn config_mapping_files_load_in_order() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    fs::write(&first, r#"{"pronouns": ["pronouns"]}"#).unwrap();
    fs::write(&second, r#"{"pronouns": ["pronouns", "preferred_pronouns"]}"#).unwrap();

    let config = autofill_map::MapperConfig {
        mapping_files: vec![first, second],
        ..autofill_map::MapperConfig::default()
    };
    let mut engine = MappingEngine::with_config(config).unwrap();
    let summary = engine.load_mapping_files().unwrap();

    assert_eq!(summary.added_profiles, 1);
    assert_eq!(summary.added_variants, 2);
    assert_eq!(
        engine.table().variants("pronouns"),
        ["pronouns".to_string(), "preferred_pronouns".to_string()]
    );
}
