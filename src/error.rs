//! @acp:module "Errors"
//! @acp:summary "Error types shared across the agent-primer library"
//! @acp:domain cli
//! @acp:layer types
//!
//! Only hard failures live here. Per-item discovery problems, bad front
//! matter and cache corruption are logged where they happen and never
//! surface as a `PrimerError`.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for agent-primer operations
#[derive(Error, Debug)]
pub enum PrimerError {
    /// A selected primitive's markdown file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Interactive prompt failed (terminal not available, etc.)
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// No home directory could be determined for global roots
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    /// The current working directory is unavailable
    #[error("Could not determine the working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    /// The agent process could not be spawned
    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for agent-primer operations
pub type Result<T> = std::result::Result<T, PrimerError>;
