#![forbid(unsafe_code)]

//! @acp:module "Agent Primer Library"
//! @acp:summary "Discover markdown primitives, pick a subset and prime an agent with them"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Agent Primer
//!
//! Launches a coding agent with selected skills and domains injected into
//! its system prompt.
//!
//! ## Features
//!
//! - **Discovery**: global (`~/.claude/`) and local (`./.claude/`) roots, symlinks resolved
//! - **Front Matter**: optional YAML `name`/`description` with safe fallbacks
//! - **Recency**: recently used items float to the top of each picker
//! - **Wizard**: per-type pickers with a proceed/restart/cancel confirmation
//!
//! ## Example
//!
//! ```rust,no_run
//! use agent_primer::{assemble_system_prompt, builtin_primitives, Environment};
//!
//! fn main() -> anyhow::Result<()> {
//!     let env = Environment::detect()?;
//!     let primitives = builtin_primitives(&env);
//!
//!     // Everything discovered, no interaction
//!     let items: Vec<_> = primitives.iter().flat_map(|p| p.discover_items()).collect();
//!     let prompt = assemble_system_prompt(&primitives, &items)?;
//!
//!     println!("{}", prompt.unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod launch;
pub mod picker;
pub mod primitive;
pub mod selection;

// Re-exports
pub use cache::{cache_key, sort_by_recent, RecentCache, RecentCacheStore, MAX_RECENT};
pub use config::{Environment, LaunchSettings};
pub use error::{PrimerError, Result};
pub use launch::Launcher;
pub use picker::{Choice, Picker, PickerOption, TerminalPicker};
pub use primitive::{
    builtin_primitives, DomainPrimitive, Primitive, PrimitiveContent, PrimitiveItem,
    PrimitiveKind, SkillPrimitive, Source,
};
pub use selection::{assemble_system_prompt, SelectionWizard, WizardOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
