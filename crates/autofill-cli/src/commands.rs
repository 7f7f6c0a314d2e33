use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use autofill_map::{
    FieldScore, MapperConfig, MappingEngine, MatchOutcome, MergeSummary, validate_field_value,
};
use autofill_model::{AnalysisReport, FormField, MatchResult, ValueCheck};
use serde::Deserialize;
use tracing::{debug, info, info_span};

use crate::logging::redact_value;

/// Accepted shapes for a scraped form: a bare array or `{ "fields": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldsDocument {
    List(Vec<FormField>),
    Form { fields: Vec<FormField> },
}

/// Builds the engine from `config`, then merges configured and extra
/// mapping files in that order.
pub fn build_engine(config: MapperConfig, extra_mappings: &[PathBuf]) -> Result<MappingEngine> {
    let mut engine = MappingEngine::with_config(config)?;
    engine
        .load_mapping_files()
        .context("load configured mapping files")?;
    for path in extra_mappings {
        engine
            .import_mappings(path)
            .with_context(|| format!("import {}", path.display()))?;
    }
    debug!(?engine, "engine ready");
    Ok(engine)
}

/// Reads scraped form fields from a JSON file.
pub fn read_fields(path: &Path) -> Result<Vec<FormField>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read fields {}", path.display()))?;
    let document: FieldsDocument = serde_json::from_str(&content)
        .with_context(|| format!("parse fields {}", path.display()))?;
    Ok(match document {
        FieldsDocument::List(fields) | FieldsDocument::Form { fields } => fields,
    })
}

pub fn run_analyze(engine: &MappingEngine, input: &Path) -> Result<AnalysisReport> {
    let span = info_span!("analyze_file", path = %input.display());
    let _guard = span.enter();
    let fields = read_fields(input)?;
    Ok(engine.analyze(&fields))
}

/// Adds a custom mapping, writing the updated table to `output` if given.
///
/// Returns whether the mapping was new.
pub fn run_map(
    engine: &mut MappingEngine,
    field_name: &str,
    profile_field: &str,
    output: Option<&Path>,
) -> Result<bool> {
    let added = engine.add_custom_mapping(field_name, profile_field);
    if let Some(path) = output {
        engine
            .export_mappings(path)
            .with_context(|| format!("export {}", path.display()))?;
    }
    Ok(added)
}

pub fn run_export(engine: &MappingEngine, path: &Path) -> Result<()> {
    engine
        .export_mappings(path)
        .with_context(|| format!("export {}", path.display()))
}

/// Merges `path` into the table, writing the result to `output` if given.
pub fn run_import(
    engine: &mut MappingEngine,
    path: &Path,
    output: Option<&Path>,
) -> Result<MergeSummary> {
    let summary = engine
        .import_mappings(path)
        .with_context(|| format!("import {}", path.display()))?;
    if let Some(output) = output {
        run_export(engine, output)?;
    }
    Ok(summary)
}

pub fn run_validate(profile_field: &str, value: &str) -> ValueCheck {
    let check = validate_field_value(profile_field, value);
    info!(
        profile_field = %profile_field,
        value = %redact_value(value),
        valid = check.is_valid(),
        "validated value"
    );
    check
}

/// Everything known about how one field maps.
#[derive(Debug, Clone)]
pub struct MappingTrace {
    pub result: MatchResult,
    pub outcome: Option<MatchOutcome>,
    pub score: Option<FieldScore>,
}

/// Maps one field and explains the decision.
pub fn run_test(engine: &MappingEngine, field: &FormField) -> MappingTrace {
    let attributes = field.effective_attributes();
    let outcome = engine.resolve(field.identifier(), Some(&attributes));
    let score = outcome.as_ref().map(|outcome| {
        engine.score(field.identifier(), &outcome.profile_field, Some(&attributes))
    });
    MappingTrace {
        result: engine.evaluate(field),
        outcome,
        score,
    }
}
