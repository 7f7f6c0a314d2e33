//! The mapping engine: one owned table, one similarity, one config.

use std::fmt;
use std::path::Path;

use autofill_model::{AnalysisReport, FieldAttributes, FormField, MatchResult};
use tracing::{info, warn};

use crate::analyze::Analyzer;
use crate::config::MapperConfig;
use crate::error::{ConfigError, Result};
use crate::matcher::{MatchOutcome, Matcher};
use crate::repository;
use crate::score::{FieldScore, Scorer};
use crate::similarity::Similarity;
use crate::table::{MappingTable, MergeSummary};

/// Maps form fields to profile fields and maintains the mapping table.
///
/// Matching, scoring and analysis borrow the table read-only. Only
/// [`add_custom_mapping`](Self::add_custom_mapping) and the import methods
/// mutate it, and they only ever add variants.
pub struct MappingEngine {
    table: MappingTable,
    similarity: Box<dyn Similarity>,
    config: MapperConfig,
}

impl MappingEngine {
    /// Engine over the built-in table with default config.
    pub fn new() -> Self {
        let config = MapperConfig::default();
        Self {
            table: MappingTable::builtin(),
            similarity: config.similarity.build(),
            config,
        }
    }

    /// Engine over the built-in table with a validated config.
    ///
    /// `config.mapping_files` are not read here; see
    /// [`load_mapping_files`](Self::load_mapping_files).
    pub fn with_config(config: MapperConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            table: MappingTable::builtin(),
            similarity: config.similarity.build(),
            config,
        })
    }

    /// Replaces the table, e.g. with an empty one.
    #[must_use]
    pub fn with_table(mut self, table: MappingTable) -> Self {
        self.table = table;
        self
    }

    /// Replaces the similarity used by both matcher and scorer.
    #[must_use]
    pub fn with_similarity(mut self, similarity: Box<dyn Similarity>) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn similarity_name(&self) -> &'static str {
        self.similarity.name()
    }

    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(
            &self.table,
            self.similarity.as_ref(),
            self.config.fuzzy_threshold,
        )
    }

    pub fn scorer(&self) -> Scorer<'_> {
        Scorer::new(&self.table, self.similarity.as_ref())
    }

    pub fn analyzer(&self) -> Analyzer<'_> {
        Analyzer::new(
            self.matcher(),
            self.scorer(),
            self.config.low_confidence_threshold,
        )
    }

    /// The profile field for `field_name`, if any.
    pub fn match_field(
        &self,
        field_name: &str,
        attributes: Option<&FieldAttributes>,
    ) -> Option<String> {
        self.matcher().match_field(field_name, attributes)
    }

    /// Like [`match_field`](Self::match_field), with the winning strategy.
    pub fn resolve(
        &self,
        field_name: &str,
        attributes: Option<&FieldAttributes>,
    ) -> Option<MatchOutcome> {
        self.matcher().resolve(field_name, attributes)
    }

    /// Maps and scores a single field without attributes.
    pub fn test_mapping(&self, field_name: &str) -> MatchResult {
        self.evaluate(&FormField::named(field_name))
    }

    /// Maps and scores a single field.
    pub fn evaluate(&self, field: &FormField) -> MatchResult {
        self.analyzer().evaluate(field)
    }

    pub fn confidence(
        &self,
        field_name: &str,
        profile_field: &str,
        attributes: Option<&FieldAttributes>,
    ) -> f64 {
        self.scorer().confidence(field_name, profile_field, attributes)
    }

    pub fn score(
        &self,
        field_name: &str,
        profile_field: &str,
        attributes: Option<&FieldAttributes>,
    ) -> FieldScore {
        self.scorer().score(field_name, profile_field, attributes)
    }

    pub fn analyze(&self, fields: &[FormField]) -> AnalysisReport {
        self.analyzer().analyze(fields)
    }

    /// Teaches the engine that `field_name` maps to `profile_field`.
    ///
    /// Returns `false` if the normalized name is empty or already a variant
    /// of `profile_field`.
    pub fn add_custom_mapping(&mut self, field_name: &str, profile_field: &str) -> bool {
        let added = self.table.insert_variant(profile_field, field_name);
        if added {
            info!(field = %field_name, profile_field = %profile_field, "added custom mapping");
        } else {
            warn!(
                field = %field_name,
                profile_field = %profile_field,
                "custom mapping not added (empty or already known)"
            );
        }
        added
    }

    pub fn export_mappings(&self, path: &Path) -> Result<()> {
        repository::export_mappings(&self.table, path)
    }

    pub fn import_mappings(&mut self, path: &Path) -> Result<MergeSummary> {
        repository::import_mappings(&mut self.table, path)
    }

    /// Merges every file in `config.mapping_files`, in order.
    ///
    /// Stops at the first failure; files merged before it stay merged.
    pub fn load_mapping_files(&mut self) -> Result<MergeSummary> {
        let mut total = MergeSummary::default();
        let paths = self.config.mapping_files.clone();
        for path in &paths {
            let summary = self.import_mappings(path)?;
            total.added_profiles += summary.added_profiles;
            total.added_variants += summary.added_variants;
            total.skipped_empty += summary.skipped_empty;
        }
        Ok(total)
    }
}

impl Default for MappingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MappingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingEngine")
            .field("profile_fields", &self.table.len())
            .field("variants", &self.table.variant_count())
            .field("similarity", &self.similarity.name())
            .field("config", &self.config)
            .finish()
    }
}
