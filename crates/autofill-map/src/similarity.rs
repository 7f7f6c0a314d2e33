//! String similarity strategies for fuzzy matching.
//!
//! Both strategies compare Unicode scalar values, are symmetric, and return
//! a ratio in [0, 1] where 1.0 means identical.

use rapidfuzz::distance::{indel, jaro_winkler};
use serde::{Deserialize, Serialize};

/// A normalized, symmetric string similarity.
pub trait Similarity: Send + Sync {
    /// Ratio in [0, 1]; 1.0 for identical strings.
    fn similarity(&self, a: &str, b: &str) -> f64;

    fn name(&self) -> &'static str;
}

/// Longest-common-subsequence ratio: `2 * LCS(a, b) / (|a| + |b|)`.
///
/// This is the normalized Indel similarity. For example `fname2` vs `fname`
/// scores 10/11 and `fname2` vs `lname` scores 8/11.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelSimilarity;

impl Similarity for IndelSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        indel::normalized_similarity(a.chars(), b.chars()).clamp(0.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "indel"
    }
}

/// Jaro-Winkler similarity; favours shared prefixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinklerSimilarity;

impl Similarity for JaroWinklerSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler::similarity(a.chars(), b.chars()).clamp(0.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "jaro-winkler"
    }
}

/// Configurable choice of similarity strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityAlgorithm {
    #[default]
    Indel,
    JaroWinkler,
}

impl SimilarityAlgorithm {
    pub fn build(self) -> Box<dyn Similarity> {
        match self {
            Self::Indel => Box::new(IndelSimilarity),
            Self::JaroWinkler => Box::new(JaroWinklerSimilarity),
        }
    }
}
