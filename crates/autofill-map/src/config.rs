//! Engine configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::similarity::SimilarityAlgorithm;

/// Minimum similarity ratio for a fuzzy match to be accepted.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.7;
/// Mapped fields scoring below this are flagged for review.
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Tunables for the mapping engine. Every field has a default, so an empty
/// config file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    pub fuzzy_threshold: f64,
    pub low_confidence_threshold: f64,
    pub similarity: SimilarityAlgorithm,
    /// Mapping files merged into the built-in table at startup, in order.
    pub mapping_files: Vec<PathBuf>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            low_confidence_threshold: DEFAULT_LOW_CONFIDENCE_THRESHOLD,
            similarity: SimilarityAlgorithm::default(),
            mapping_files: Vec::new(),
        }
    }
}

impl MapperConfig {
    /// Rejects thresholds outside [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("fuzzy_threshold", self.fuzzy_threshold),
            ("low_confidence_threshold", self.low_confidence_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_matcher_contract() {
        let config = MapperConfig::default();
        assert_eq!(config.fuzzy_threshold, 0.7);
        assert_eq!(config.low_confidence_threshold, 0.7);
        assert_eq!(config.similarity, SimilarityAlgorithm::Indel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let config = MapperConfig {
            fuzzy_threshold: 1.5,
            ..MapperConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ThresholdOutOfRange {
                name: "fuzzy_threshold",
                ..
            }
        ));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: MapperConfig =
            serde_json::from_str(r#"{"similarity": "jaro-winkler"}"#).expect("parse config");
        assert_eq!(config.similarity, SimilarityAlgorithm::JaroWinkler);
        assert_eq!(config.fuzzy_threshold, DEFAULT_FUZZY_THRESHOLD);
    }
}
