//! @acp:module "Primitive Loader"
//! @acp:summary "Load a selected item's body and list its sibling references"
//! @acp:domain primitives
//! @acp:layer io

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::frontmatter::parse_document;
use super::{PrimitiveContent, PrimitiveItem};
use crate::error::{PrimerError, Result};

/// Directory next to the primary file holding extra material
pub const REFERENCES_DIR: &str = "references";

/// Metadata shape shared by skills and domains
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceMetadata {
    #[serde(default)]
    pub references: Vec<String>,
}

impl ReferenceMetadata {
    /// Narrow untyped content metadata; a malformed payload reads as empty
    pub fn from_metadata(metadata: &Map<String, Value>) -> Self {
        match serde_json::from_value(Value::Object(metadata.clone())) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Ignoring malformed primitive metadata: {}", e);
                Self::default()
            }
        }
    }

    pub fn into_metadata(self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// @acp:summary "Read the item's file, strip front matter and collect references"
///
/// Unlike discovery this is a hard failure: the item was chosen by the user,
/// so a vanished or unreadable file aborts prompt assembly.
pub fn load_markdown_content(item: &PrimitiveItem) -> Result<PrimitiveContent<'_>> {
    let text = std::fs::read_to_string(&item.path).map_err(|source| PrimerError::Read {
        path: item.path.clone(),
        source,
    })?;

    let doc = parse_document(&text);
    let references = item
        .path
        .parent()
        .map(|dir| list_references(&dir.join(REFERENCES_DIR)))
        .unwrap_or_default();

    Ok(PrimitiveContent {
        item,
        main_content: doc.body,
        metadata: ReferenceMetadata { references }.into_metadata(),
    })
}

/// Names of the direct entries of `dir`, sorted; empty when absent
pub fn list_references(dir: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return vec![],
        Err(e) => {
            tracing::warn!("Cannot list references in {}: {}", dir.display(), e);
            return vec![];
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
