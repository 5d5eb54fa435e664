//! @acp:module "List Command"
//! @acp:summary "Print discovered skills and domains without launching"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::cache::{cache_key, RecentCacheStore};
use crate::config::Environment;
use crate::primitive::{builtin_primitives, PrimitiveItem};
use crate::selection::discover_groups;

/// Options for the list command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Output as JSON (default: human-readable)
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListedItem<'a> {
    #[serde(flatten)]
    item: &'a PrimitiveItem,
    key: String,
    recent: bool,
}

/// Execute `--list`
pub fn execute_list(env: &Environment, options: ListOptions) -> Result<i32> {
    let cache = RecentCacheStore::new(env.cache_file()).load();
    let primitives = builtin_primitives(env);
    let groups = discover_groups(&primitives, &cache);

    if groups.iter().all(|g| g.items.is_empty()) {
        super::print_nothing_found(env);
        return Ok(1);
    }

    if options.json {
        let listed: Vec<ListedItem> = groups
            .iter()
            .flat_map(|g| g.items.iter())
            .map(|item| ListedItem {
                item,
                key: cache_key(item),
                recent: cache.contains(item),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(0);
    }

    for group in &groups {
        println!(
            "{} ({})",
            style(group.primitive.label()).bold(),
            group.items.len()
        );
        if group.items.is_empty() {
            println!("  {}", style("none").dim());
        }
        for item in &group.items {
            let marker = if cache.contains(item) {
                style("★").yellow().to_string()
            } else {
                " ".to_string()
            };
            println!(
                "  {} {} {} - {}",
                marker,
                style(&item.name).cyan(),
                style(format!("[{}]", item.source)).dim(),
                item.description
            );
            println!("      {}", style(item.path.display()).dim());
        }
        println!();
    }

    Ok(0)
}
