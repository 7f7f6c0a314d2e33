//! Loading [`MapperConfig`] from TOML.
//!
//! An explicit `--config` path must exist and parse. Without one, the
//! per-user config file is used when present:
//!
//! - Linux: `~/.config/field-mapper/config.toml`
//! - macOS: `~/Library/Application Support/dev.field-mapper.field-mapper/config.toml`
//! - Windows: `%APPDATA%\field-mapper\field-mapper\config\config.toml`
//!
//! A missing or broken per-user file falls back to defaults with a warning.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use autofill_map::MapperConfig;
use directories::ProjectDirs;
use tracing::{info, warn};

const APP_QUALIFIER: &str = "dev";
const APP_ORG: &str = "field-mapper";
const APP_NAME: &str = "field-mapper";
const CONFIG_FILENAME: &str = "config.toml";

/// The per-user config path, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Parses and validates a TOML config document.
///
/// Relative `mapping_files` are resolved against `base_dir`.
pub fn parse_config(content: &str, base_dir: Option<&Path>) -> Result<MapperConfig> {
    let mut config: MapperConfig = toml::from_str(content).context("parse config")?;
    config.validate()?;
    if let Some(base_dir) = base_dir {
        for path in &mut config.mapping_files {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
    }
    Ok(config)
}

/// Reads the config at `path`; it must exist.
pub fn read_config(path: &Path) -> Result<MapperConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config = parse_config(&content, path.parent())
        .with_context(|| format!("invalid config {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Resolves the config for this run.
pub fn load_config(explicit: Option<&Path>) -> Result<MapperConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let Some(path) = default_config_path() else {
        warn!("could not determine config directory, using defaults");
        return Ok(MapperConfig::default());
    };
    Ok(load_or_default(&path))
}

/// Reads `path`, falling back to defaults if it is missing or invalid.
pub fn load_or_default(path: &Path) -> MapperConfig {
    match fs::read_to_string(path) {
        Ok(content) => match parse_config(&content, path.parent()) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(error) => {
                warn!(path = %path.display(), "ignoring invalid config: {error:#}");
                MapperConfig::default()
            }
        },
        Err(error) if error.kind() == ErrorKind::NotFound => MapperConfig::default(),
        Err(error) => {
            warn!(path = %path.display(), %error, "failed to read config, using defaults");
            MapperConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autofill_map::SimilarityAlgorithm;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config("", None).unwrap(), MapperConfig::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = parse_config(
            r#"
fuzzy_threshold = 0.8
low_confidence_threshold = 0.6
similarity = "jaro-winkler"
mapping_files = ["team.json", "/etc/field-mapper/global.json"]
"#,
            Some(Path::new("/home/me/.config/field-mapper")),
        )
        .unwrap();
        assert_eq!(config.fuzzy_threshold, 0.8);
        assert_eq!(config.low_confidence_threshold, 0.6);
        assert_eq!(config.similarity, SimilarityAlgorithm::JaroWinkler);
        assert_eq!(
            config.mapping_files,
            vec![
                PathBuf::from("/home/me/.config/field-mapper/team.json"),
                PathBuf::from("/etc/field-mapper/global.json"),
            ]
        );
    }

    #[test]
    fn rejects_unknown_keys_and_bad_thresholds() {
        assert!(parse_config("fuzzy = 0.5", None).is_err());
        assert!(parse_config("fuzzy_threshold = 2.0", None).is_err());
    }
}
