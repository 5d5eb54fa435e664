//! @acp:module "Primitives"
//! @acp:summary "Markdown knowledge units (skills, domains) and their shared contract"
//! @acp:domain primitives
//! @acp:layer model
//!
//! A primitive is a typed category of preloadable knowledge. Each category
//! knows how to find its items on disk, load a selected item's body and
//! render a group of loaded items into one block of system prompt.
//!
//! ## Supported Primitives
//!
//! - Skills (`SKILL.md` under `.claude/skills/`)
//! - Domains (`DOMAIN.md` under `.claude/domains/`)

pub mod discovery;
pub mod domain;
pub mod frontmatter;
pub mod loader;
pub mod render;
pub mod skill;

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use discovery::{find_primitive_files, read_items, same_location};
pub use domain::DomainPrimitive;
pub use frontmatter::{parse_document, split_frontmatter, Frontmatter, MarkdownDocument};
pub use loader::{list_references, load_markdown_content, ReferenceMetadata};
pub use render::{render_block, Framing};
pub use skill::SkillPrimitive;

use crate::config::Environment;
use crate::error::Result;

/// Description used when front matter provides none
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Primitive category discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Skill,
    Domain,
}

impl PrimitiveKind {
    /// Get all built-in kinds in registration order
    pub fn all() -> &'static [PrimitiveKind] {
        &[PrimitiveKind::Skill, PrimitiveKind::Domain]
    }

    /// Identifier used in cache keys
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Skill => "skill",
            PrimitiveKind::Domain => "domain",
        }
    }

    /// Root directory name under `.claude/`
    pub fn directory_name(&self) -> &'static str {
        match self {
            PrimitiveKind::Skill => "skills",
            PrimitiveKind::Domain => "domains",
        }
    }

    /// File that marks a directory as an item of this kind
    pub fn required_file(&self) -> &'static str {
        match self {
            PrimitiveKind::Skill => "SKILL.md",
            PrimitiveKind::Domain => "DOMAIN.md",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an item was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Under the home directory
    Global,
    /// Under the working directory
    Local,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Global => "global",
            Source::Local => "local",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// @acp:summary "One discovered primitive instance"
///
/// Created fresh on every discovery pass and never mutated. Identity for
/// the recent cache is `(kind, source, name)`; `path` does not take part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveItem {
    #[serde(rename = "type")]
    pub kind: PrimitiveKind,
    pub name: String,
    pub description: String,
    /// Absolute path of the primary markdown file
    pub path: PathBuf,
    pub source: Source,
}

/// @acp:summary "Loaded body of a selected item"
///
/// `metadata` is deliberately untyped at this boundary. Each primitive
/// narrows it to its own shape right before formatting.
#[derive(Debug, Clone)]
pub struct PrimitiveContent<'a> {
    pub item: &'a PrimitiveItem,
    /// Markdown body with front matter removed
    pub main_content: String,
    pub metadata: Map<String, Value>,
}

/// @acp:summary "Capability implemented by every primitive category"
pub trait Primitive: Send + Sync {
    /// Discriminator of the items this primitive produces
    fn kind(&self) -> PrimitiveKind;

    /// Human-readable group label ("Skills", "Domains")
    fn label(&self) -> &'static str;

    /// Scan configured roots. Never fails; per-entry problems are logged.
    fn discover_items(&self) -> Vec<PrimitiveItem>;

    /// Read a selected item's body and sibling reference names
    fn load_content<'a>(&self, item: &'a PrimitiveItem) -> Result<PrimitiveContent<'a>> {
        load_markdown_content(item)
    }

    /// Render the loaded items of this kind, in the given order, as one block
    fn format_for_prompt(&self, contents: &[PrimitiveContent<'_>]) -> String;
}

/// Built-in primitives in registration order: skills, then domains
pub fn builtin_primitives(env: &Environment) -> Vec<Box<dyn Primitive>> {
    vec![
        Box::new(SkillPrimitive::from_environment(env)),
        Box::new(DomainPrimitive::from_environment(env)),
    ]
}

/// Look up the registered primitive for a kind
pub fn primitive_for<'a>(
    primitives: &'a [Box<dyn Primitive>],
    kind: PrimitiveKind,
) -> Option<&'a dyn Primitive> {
    primitives
        .iter()
        .find(|p| p.kind() == kind)
        .map(|p| p.as_ref())
}
