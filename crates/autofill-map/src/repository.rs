//! Mapping files on disk.
//!
//! A mapping file is a JSON object of profile field -> array of variant
//! names, the same shape as [`MappingTable`] serializes to:
//!
//! ```json
//! { "email": ["email", "email_address"], "firstName": ["first_name"] }
//! ```
//!
//! Export writes through a temp file and renames it over the target, so a
//! reader never sees a half-written file. Import merges into an existing
//! table and never removes variants.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::info;

use crate::error::{MappingFileError, Result};
use crate::table::{MappingTable, MergeSummary};

/// Writes `table` to `path` as pretty-printed JSON.
pub fn export_mappings(table: &MappingTable, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(table).map_err(|source| MappingFileError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| MappingFileError::io("create directory", parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let mut file =
        File::create(&temp_path).map_err(|e| MappingFileError::io("create", &temp_path, e))?;
    file.write_all(&bytes)
        .map_err(|e| MappingFileError::io("write", &temp_path, e))?;
    file.sync_all()
        .map_err(|e| MappingFileError::io("sync", &temp_path, e))?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|source| MappingFileError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        profile_fields = table.len(),
        variants = table.variant_count(),
        "exported mappings"
    );
    Ok(())
}

/// Reads a mapping file without touching any table. Document order is kept.
pub fn read_mapping_file(path: &Path) -> Result<IndexMap<String, Vec<String>>> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MappingFileError::NotFound {
            path: path.to_path_buf(),
        },
        _ => MappingFileError::io("read", path, e),
    })?;
    serde_json::from_str(&contents).map_err(|source| MappingFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Union-merges the mapping file at `path` into `table`.
///
/// On error the table is left unchanged.
pub fn import_mappings(table: &mut MappingTable, path: &Path) -> Result<MergeSummary> {
    let incoming = read_mapping_file(path)?;
    let summary = table.merge(&incoming);
    info!(
        path = %path.display(),
        added_profiles = summary.added_profiles,
        added_variants = summary.added_variants,
        skipped_empty = summary.skipped_empty,
        "imported mappings"
    );
    Ok(summary)
}

/// `mappings.json` -> `mappings.json.tmp`, next to the target.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
