#![deny(unsafe_code)]

//! Maps web form fields onto a fixed applicant profile schema.
//!
//! Field names are normalized, then resolved by exact lookup, fuzzy
//! similarity, or attribute context. Accepted mappings get a confidence
//! score, and batches get an [`AnalysisReport`](autofill_model::AnalysisReport)
//! with suggestions.

pub mod analyze;
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod repository;
pub mod score;
mod seed;
pub mod similarity;
pub mod table;
pub mod validate;

pub use analyze::{Analyzer, find_common_patterns};
pub use config::{DEFAULT_FUZZY_THRESHOLD, DEFAULT_LOW_CONFIDENCE_THRESHOLD, MapperConfig};
pub use engine::MappingEngine;
pub use error::{ConfigError, MappingFileError};
pub use matcher::{MatchOutcome, Matcher};
pub use normalize::normalize_field_name;
pub use repository::{export_mappings, import_mappings, read_mapping_file};
pub use score::{ConfidenceLevel, FieldScore, ScoreComponent, Scorer};
pub use similarity::{IndelSimilarity, JaroWinklerSimilarity, Similarity, SimilarityAlgorithm};
pub use table::{MappingTable, MergeSummary};
pub use validate::{ValueRule, validate_field_value};
