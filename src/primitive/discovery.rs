//! @acp:module "Primitive Discovery"
//! @acp:summary "Find primitive markdown files under a root and build items from them"
//! @acp:domain primitives
//! @acp:layer io
//!
//! Only the immediate entries of a root are inspected. An entry counts when
//! it is a directory (or a link to one) holding the required file, or when
//! it is the required file itself sitting directly in the root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::frontmatter::parse_document;
use super::{PrimitiveItem, PrimitiveKind, Source, DEFAULT_DESCRIPTION};

/// @acp:summary "Collect required-file paths under `root`, in directory listing order"
pub fn find_primitive_files(root: &Path, required_file: &str) -> Vec<PathBuf> {
    if !root.exists() {
        tracing::debug!("Primitive root {} does not exist", root.display());
        return vec![];
    }

    let mut found = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                continue;
            }
        };

        let resolved = if entry.path_is_symlink() {
            match std::fs::canonicalize(entry.path()) {
                Ok(target) => target,
                Err(_) => {
                    tracing::debug!("Skipping dangling link {}", entry.path().display());
                    continue;
                }
            }
        } else {
            entry.path().to_path_buf()
        };

        let metadata = match std::fs::metadata(&resolved) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!("Cannot stat {}: {}", resolved.display(), e);
                continue;
            }
        };

        if metadata.is_dir() {
            let candidate = resolved.join(required_file);
            if candidate.is_file() {
                found.push(candidate);
            }
        } else if metadata.is_file() && entry.file_name() == required_file {
            found.push(resolved);
        }
    }

    found
}

/// @acp:summary "Read each path into an item; unreadable files are logged and dropped"
pub fn read_items(kind: PrimitiveKind, paths: &[PathBuf], source: Source) -> Vec<PrimitiveItem> {
    paths
        .iter()
        .filter_map(|path| match std::fs::read_to_string(path) {
            Ok(text) => Some(build_item(kind, path, source, &text)),
            Err(e) => {
                tracing::error!("Failed to read {} {}: {}", kind, path.display(), e);
                None
            }
        })
        .collect()
}

fn build_item(kind: PrimitiveKind, path: &Path, source: Source, text: &str) -> PrimitiveItem {
    let doc = parse_document(text);

    let name = doc
        .frontmatter
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| containing_dir_name(path));
    let description = doc
        .frontmatter
        .description()
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();

    PrimitiveItem {
        kind,
        name,
        description,
        path: path.to_path_buf(),
        source,
    }
}

fn containing_dir_name(path: &Path) -> String {
    path.parent()
        .and_then(|dir| dir.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// True when both paths resolve to the same physical directory
pub fn same_location(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
