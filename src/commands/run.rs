//! @acp:module "Run Command"
//! @acp:summary "Select primitives interactively and launch the agent with them"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Discovery and cache reads degrade quietly. The only places this command
//! fails are an unreadable selected item and an agent that cannot start.

use anyhow::{Context, Result};
use console::style;

use crate::cache::RecentCacheStore;
use crate::config::{Environment, LaunchSettings};
use crate::launch::Launcher;
use crate::picker::Picker;
use crate::primitive::builtin_primitives;
use crate::selection::{assemble_system_prompt, discover_groups, SelectionWizard, WizardOutcome};

/// Options for the default (interactive) command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub launch: LaunchSettings,
}

/// Execute the wizard and hand off to the agent; returns the exit code
pub async fn execute_run(
    env: &Environment,
    options: RunOptions,
    picker: &mut dyn Picker,
) -> Result<i32> {
    let store = RecentCacheStore::new(env.cache_file());
    let cache = store.load();

    let primitives = builtin_primitives(env);
    let groups = discover_groups(&primitives, &cache);

    if groups.iter().all(|g| g.items.is_empty()) {
        super::print_nothing_found(env);
        return Ok(1);
    }

    let selected = match SelectionWizard::new(&groups, &cache).run(picker)? {
        WizardOutcome::Launch(items) => items,
        WizardOutcome::Cancelled => {
            println!("{} Cancelled", style("!").yellow());
            return Ok(0);
        }
    };

    let system_prompt = if selected.is_empty() {
        None
    } else {
        store.update(&selected);
        assemble_system_prompt(&primitives, &selected)
            .context("Failed to load selected primitives")?
    };

    let launcher = Launcher::new(options.launch);
    println!(
        "{} Launching {}{}",
        style("→").cyan(),
        style(launcher.program()).bold(),
        match &system_prompt {
            Some(_) => format!(" with {} primitive(s)", selected.len()),
            None => String::new(),
        }
    );

    let code = launcher.launch(system_prompt.as_deref()).await?;
    Ok(code)
}
