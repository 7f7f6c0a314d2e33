//! The mapping table: profile field -> known raw-name variants.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::normalize::normalize_field_name;
use crate::seed::BUILTIN_VARIANTS;

/// Profile fields and the normalized variants that resolve to them.
///
/// Profile fields iterate in insertion order (built-in seed first, then
/// custom and imported fields as they arrive); variants keep insertion order. Every stored variant is normalized and non-empty, and no profile
/// field holds the same variant twice. The table only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MappingTable {
    entries: IndexMap<String, Vec<String>>,
}

/// What a [`MappingTable::merge`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Profile fields that did not exist before.
    pub added_profiles: usize,
    /// Variants appended (including those of new profile fields).
    pub added_variants: usize,
    /// Variants dropped because they normalized to the empty string.
    pub skipped_empty: usize,
}

impl MappingTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table seeded with the built-in applicant profile variants.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (profile_field, variants) in BUILTIN_VARIANTS {
            for variant in *variants {
                table.insert_variant(profile_field, variant);
            }
        }
        table
    }

    /// Adds `raw` (normalized) as a variant of `profile_field`, creating the
    /// profile field if needed.
    ///
    /// Returns `false` without changing the table when the normalized name is
    /// empty or already stored under that profile field.
    pub fn insert_variant(&mut self, profile_field: &str, raw: &str) -> bool {
        let variant = normalize_field_name(raw);
        if variant.is_empty() {
            return false;
        }
        if let Some(variants) = self.entries.get_mut(profile_field) {
            if variants.contains(&variant) {
                return false;
            }
            variants.push(variant);
        } else {
            self.entries
                .insert(profile_field.to_string(), vec![variant]);
        }
        true
    }

    /// Union-merges `other` into this table. Never removes variants.
    pub fn merge(&mut self, other: &IndexMap<String, Vec<String>>) -> MergeSummary {
        let mut summary = MergeSummary::default();
        for (profile_field, variants) in other {
            let existed = self.entries.contains_key(profile_field);
            let mut added = 0;
            for raw in variants {
                if normalize_field_name(raw).is_empty() {
                    warn!(profile_field = %profile_field, variant = %raw, "skipping empty variant");
                    summary.skipped_empty += 1;
                    continue;
                }
                if self.insert_variant(profile_field, raw) {
                    added += 1;
                }
            }
            if !existed && added > 0 {
                summary.added_profiles += 1;
            }
            summary.added_variants += added;
            if added > 0 {
                debug!(profile_field = %profile_field, added, "merged variants");
            }
        }
        summary
    }

    /// The profile field holding `normalized` as a variant, if any.
    ///
    /// The empty string never matches.
    pub fn find_exact(&self, normalized: &str) -> Option<&str> {
        if normalized.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(_, variants)| variants.iter().any(|variant| variant == normalized))
            .map(|(profile_field, _)| profile_field.as_str())
    }

    /// Whether `normalized` is stored under `profile_field`.
    pub fn contains_variant(&self, profile_field: &str, normalized: &str) -> bool {
        !normalized.is_empty()
            && self
                .variants(profile_field)
                .iter()
                .any(|variant| variant == normalized)
    }

    /// Variants of `profile_field` (empty if unknown).
    pub fn variants(&self, profile_field: &str) -> &[String] {
        self.entries
            .get(profile_field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains_profile(&self, profile_field: &str) -> bool {
        self.entries.contains_key(profile_field)
    }

    pub fn profile_fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(profile_field, variants)| (profile_field.as_str(), variants.as_slice()))
    }

    /// Number of profile fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of stored variants.
    pub fn variant_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// A plain copy of the entries, as written by export.
    pub fn to_entries(&self) -> IndexMap<String, Vec<String>> {
        self.entries.clone()
    }
}
