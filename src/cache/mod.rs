//! @acp:module "Recent Cache"
//! @acp:summary "Bounded record of recently selected primitives driving picker order"
//! @acp:domain cache
//! @acp:layer io
//!
//! The cache is best effort. Reads that fail for any reason produce an
//! empty cache and writes that fail are logged and dropped, so it never
//! blocks a launch. Concurrent runs may lose each other's updates.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::primitive::PrimitiveItem;

/// Maximum number of entries kept on disk
pub const MAX_RECENT: usize = 10;

/// @acp:summary "Mapping from cache key to last-selected time in epoch milliseconds"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentCache {
    pub recent: BTreeMap<String, i64>,
}

impl RecentCache {
    /// Timestamp recorded for an item, if any
    pub fn timestamp(&self, item: &PrimitiveItem) -> Option<i64> {
        self.recent.get(&cache_key(item)).copied()
    }

    /// Whether the item was selected in a previous run
    pub fn contains(&self, item: &PrimitiveItem) -> bool {
        self.recent.contains_key(&cache_key(item))
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Record `items` as used at `now`, then prune to [`MAX_RECENT`]
    pub fn touch(&mut self, items: &[PrimitiveItem], now: i64) {
        for item in items {
            self.recent.insert(cache_key(item), now);
        }
        self.prune();
    }

    fn prune(&mut self) {
        if self.recent.len() <= MAX_RECENT {
            return;
        }

        let mut entries: Vec<(String, i64)> = std::mem::take(&mut self.recent).into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(MAX_RECENT);
        self.recent = entries.into_iter().collect();
    }
}

/// Canonical identity string: `{type}:{source}:{name}`
pub fn cache_key(item: &PrimitiveItem) -> String {
    format!("{}:{}:{}", item.kind, item.source, item.name)
}

/// @acp:summary "Most recent first, never-used last, ties broken by name"
pub fn sort_by_recent(items: &[PrimitiveItem], cache: &RecentCache) -> Vec<PrimitiveItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ta = cache.timestamp(a).unwrap_or(0);
        let tb = cache.timestamp(b).unwrap_or(0);
        tb.cmp(&ta).then_with(|| compare_names(&a.name, &b.name))
    });
    sorted
}

/// Case-insensitive ordering with a byte-order tie break
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn cache_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "required": ["recent"],
        "properties": {
            "recent": {
                "type": "object",
                "additionalProperties": { "type": "number" }
            }
        }
    })
}

/// @acp:summary "Reads and writes the recent cache file"
#[derive(Debug, Clone)]
pub struct RecentCacheStore {
    path: PathBuf,
}

impl RecentCacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cache; missing, unreadable or invalid files read as empty
    pub fn load(&self) -> RecentCache {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Cannot read recent cache {}: {}", self.path.display(), e);
                }
                return RecentCache::default();
            }
        };

        match parse_cache(&content) {
            Some(cache) => cache,
            None => {
                tracing::warn!("Ignoring invalid recent cache at {}", self.path.display());
                RecentCache::default()
            }
        }
    }

    /// Persist the cache, swallowing any error
    pub fn save(&self, cache: &RecentCache) {
        if let Err(e) = self.try_save(cache) {
            tracing::warn!("Failed to write recent cache {}: {}", self.path.display(), e);
        }
    }

    fn try_save(&self, cache: &RecentCache) -> crate::error::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(cache)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Mark `items` as used now and persist; returns the updated cache
    pub fn update(&self, items: &[PrimitiveItem]) -> RecentCache {
        self.update_at(items, chrono::Utc::now().timestamp_millis())
    }

    /// Same as [`update`](Self::update) with an explicit timestamp
    pub fn update_at(&self, items: &[PrimitiveItem], now: i64) -> RecentCache {
        let mut cache = self.load();
        cache.touch(items, now);
        self.save(&cache);
        cache
    }

    /// Delete the cache file; true when a file was actually removed
    pub fn clear(&self) -> bool {
        match std::fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to remove recent cache {}: {}", self.path.display(), e);
                }
                false
            }
        }
    }
}

fn parse_cache(content: &str) -> Option<RecentCache> {
    let value: Value = serde_json::from_str(content).ok()?;

    let validator = match jsonschema::validator_for(&cache_schema()) {
        Ok(validator) => validator,
        Err(e) => {
            tracing::error!("Recent cache schema failed to compile: {}", e);
            return None;
        }
    };
    if !validator.is_valid(&value) {
        return None;
    }

    serde_json::from_value(value).ok()
}
