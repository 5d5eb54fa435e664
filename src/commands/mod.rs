//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule and returns the process exit code.

pub mod clear_cache;
pub mod list;
pub mod run;

pub use clear_cache::execute_clear_cache;
pub use list::{execute_list, ListOptions};
pub use run::{execute_run, RunOptions};

use console::style;

use crate::config::Environment;
use crate::primitive::PrimitiveKind;

/// Tell the user where primitives are expected when none were found
pub(crate) fn print_nothing_found(env: &Environment) {
    eprintln!("{} No skills or domains found", style("✗").red());
    eprintln!("  Looked in:");
    for kind in PrimitiveKind::all() {
        eprintln!("    {}", env.global_root(*kind).display());
        eprintln!("    {}", env.local_root(*kind).display());
    }
    eprintln!(
        "  Create a folder containing a {} or {} file in one of them",
        style("SKILL.md").cyan(),
        style("DOMAIN.md").cyan()
    );
}
