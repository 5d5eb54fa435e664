//! @acp:module "Configuration"
//! @acp:summary "Startup environment and launch settings resolved once per run"
//! @acp:domain cli
//! @acp:layer config
//!
//! Home, working directory and cache root are looked up a single time in
//! [`Environment::detect`] and passed down explicitly, so discovery and the
//! recent cache can be pointed at temporary directories in tests.

use std::path::{Path, PathBuf};

use crate::error::{PrimerError, Result};
use crate::primitive::PrimitiveKind;

/// Directory under home/cwd holding every primitive root
pub const AGENT_DIR: &str = ".claude";

/// Directory under the cache root owned by this tool
pub const CACHE_DIR: &str = "agent-primer";

/// File name of the recent-selection cache
pub const CACHE_FILE: &str = "recent.json";

/// Default agent executable
pub const DEFAULT_AGENT: &str = "claude";

/// @acp:summary "Filesystem locations the launcher reads and writes"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// User home directory (global roots)
    pub home_dir: PathBuf,
    /// Current working directory (local roots)
    pub working_dir: PathBuf,
    /// Platform cache directory
    pub cache_root: PathBuf,
}

impl Environment {
    /// Build an environment from explicit paths
    pub fn new(
        home_dir: impl Into<PathBuf>,
        working_dir: impl Into<PathBuf>,
        cache_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            home_dir: home_dir.into(),
            working_dir: working_dir.into(),
            cache_root: cache_root.into(),
        }
    }

    /// @acp:summary "Resolve home, cwd and cache root from the running process"
    pub fn detect() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or(PrimerError::HomeDirNotFound)?;
        let working_dir = std::env::current_dir().map_err(PrimerError::WorkingDir)?;
        let cache_root = dirs::cache_dir().unwrap_or_else(|| home_dir.join(".cache"));

        tracing::debug!(
            "Environment: home={} cwd={} cache={}",
            home_dir.display(),
            working_dir.display(),
            cache_root.display()
        );

        Ok(Self {
            home_dir,
            working_dir,
            cache_root,
        })
    }

    /// Global root for a primitive kind, e.g. `~/.claude/skills`
    pub fn global_root(&self, kind: PrimitiveKind) -> PathBuf {
        agent_root(&self.home_dir, kind)
    }

    /// Local root for a primitive kind, e.g. `./.claude/skills`
    pub fn local_root(&self, kind: PrimitiveKind) -> PathBuf {
        agent_root(&self.working_dir, kind)
    }

    /// Location of the persisted recent cache
    pub fn cache_file(&self) -> PathBuf {
        self.cache_root.join(CACHE_DIR).join(CACHE_FILE)
    }
}

fn agent_root(base: &Path, kind: PrimitiveKind) -> PathBuf {
    base.join(AGENT_DIR).join(kind.directory_name())
}

/// @acp:summary "How the agent process gets started"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    /// Agent executable name or path
    pub program: String,
    /// Add the permission-bypass flag
    pub dangerous: bool,
    /// Arguments forwarded verbatim after our own flags
    pub passthrough: Vec<String>,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_AGENT.to_string(),
            dangerous: false,
            passthrough: vec![],
        }
    }
}
