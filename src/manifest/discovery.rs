//! Manifest discovery.
//!
//! Finds the workspace's `package.json` and returns its normalized JSON
//! text. A failed directory walk is logged and treated the same as "nothing
//! found", matching the editor's file-search behavior; callers cannot tell
//! the two cases apart.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::logging::Logger;

/// File name of the extension manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Errors surfaced while loading the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No manifest exists under the workspace root, or the search failed.
    #[error("no {MANIFEST_FILE_NAME} found in workspace")]
    NotFound,
    /// The manifest exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The manifest text is not valid JSON.
    #[error("manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the first `package.json` in the workspace and returns its JSON text.
///
/// The content is round-tripped through the JSON parser, so the returned
/// string is both validated and normalized.
pub fn read_manifest_string(root: &Path, logger: &Logger) -> Result<String, ManifestError> {
    let log = logger.with_scope("manifest/read_manifest_string");

    let Some(path) = find_manifest(root, logger) else {
        log.error(&format!("No {} found in workspace", MANIFEST_FILE_NAME));
        return Err(ManifestError::NotFound);
    };

    let content = fs::read_to_string(&path).map_err(|source| ManifestError::Read {
        path: path.clone(),
        source,
    })?;
    let manifest: serde_json::Value = serde_json::from_str(&content)?;
    Ok(manifest.to_string())
}

/// Finds the first `package.json` located under the workspace root.
///
/// The root's own manifest wins; otherwise the tree is walked in file-name
/// order with hidden directories and `node_modules` skipped. Walk failures
/// are logged and reported as `None`.
pub fn find_manifest(root: &Path, logger: &Logger) -> Option<PathBuf> {
    let log = logger.with_scope("manifest/find_manifest");

    let direct = root.join(MANIFEST_FILE_NAME);
    if direct.is_file() {
        return Some(direct);
    }

    let walk = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walk {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && entry.file_name() == MANIFEST_FILE_NAME {
                    return Some(entry.into_path());
                }
            }
            Err(err) => {
                log.error(&format!("Error finding {}: {}", MANIFEST_FILE_NAME, err));
                return None;
            }
        }
    }

    None
}

/// Directories the walk never descends into.
fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name == "node_modules" || name.starts_with('.'))
}
