//! @acp:module "Clear Cache Command"
//! @acp:summary "Delete the recent-selection cache"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::cache::RecentCacheStore;
use crate::config::Environment;

/// Execute `--clear-cache`
pub fn execute_clear_cache(env: &Environment) -> Result<i32> {
    let store = RecentCacheStore::new(env.cache_file());

    if store.clear() {
        println!(
            "{} Cleared recent selections ({})",
            style("✓").green(),
            store.path().display()
        );
    } else {
        println!("{} No recent selections to clear", style("→").dim());
    }

    Ok(0)
}
