//! Canonicalization of raw form field identifiers.

use std::sync::LazyLock;

use regex::Regex;

/// Prefixes stripped from a lowercased identifier. First match wins.
pub const FIELD_PREFIXES: [&str; 6] = [
    "input_",
    "field_",
    "form_",
    "user_",
    "applicant_",
    "candidate_",
];

/// Suffixes stripped after the prefix. First match wins.
pub const FIELD_SUFFIXES: [&str; 5] = ["_field", "_input", "_text", "_area", "_box"];

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s.]+").expect("Invalid separator regex"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]").expect("Invalid non-word regex"));
static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{2,}").expect("Invalid underscore regex"));

/// Normalizes a raw field identifier into a comparable token.
///
/// Lowercases, strips at most one known prefix and one known suffix, turns
/// separators and other non-word characters into `_`, collapses repeated
/// underscores and trims them from both ends. Total over any input; the
/// empty string maps to itself.
pub fn normalize_field_name(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let lowered = raw.to_lowercase();
    let mut cleaned = lowered.as_str();
    if let Some(rest) = FIELD_PREFIXES
        .iter()
        .find_map(|prefix| cleaned.strip_prefix(prefix))
    {
        cleaned = rest;
    }
    if let Some(rest) = FIELD_SUFFIXES
        .iter()
        .find_map(|suffix| cleaned.strip_suffix(suffix))
    {
        cleaned = rest;
    }

    let cleaned = SEPARATOR_RUN.replace_all(cleaned, "_");
    let cleaned = NON_WORD.replace_all(&cleaned, "_");
    let cleaned = UNDERSCORE_RUN.replace_all(&cleaned, "_");
    cleaned.trim_matches('_').to_string()
}
