//! Cache boundary for search results.
//!
//! The engine talks to an injected [`CacheGateway`] rather than a global
//! store, so tests can swap in a fake and observe hits and misses. The
//! default implementation is [`MemoryStore`], an in-process moka cache with
//! a per-entry time-to-live.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use log::debug;

use crate::model::RecipeSummary;

/// Default maximum number of entries held by [`MemoryStore`].
const DEFAULT_MAX_ENTRIES: u64 = 1_000;

/// Value stored under a cache key.
#[derive(Debug, Clone)]
pub enum CachedPayload {
    /// Ranked result list of a single search
    Results(Vec<RecipeSummary>),
    /// Composite result of a batch search, keyed by query
    Batch(BTreeMap<String, RecipeSummary>),
}

/// Key/value store with a time-to-live per entry.
///
/// Entries expire by TTL only; the engine never invalidates them. `put` and
/// `forget` report success as a bool so store failures stay observable
/// without ever failing a search.
pub trait CacheGateway: Send + Sync {
    fn has(&self, key: &str) -> bool;
    fn get(&self, key: &str) -> Option<CachedPayload>;
    fn put(&self, key: &str, value: CachedPayload, ttl: Duration) -> bool;
    fn forget(&self, key: &str) -> bool;
}

#[derive(Clone)]
struct Entry {
    payload: CachedPayload,
    ttl: Duration,
}

struct PerEntryTtl;

impl moka::Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-process cache backed by moka, honoring the TTL passed to `put`.
pub struct MemoryStore {
    entries: moka::sync::Cache<String, Entry>,
}

impl MemoryStore {
    /// Create a store with the default capacity.
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Create a store with a custom maximum entry count.
    pub fn with_max_entries(max: u64) -> Self {
        Self {
            entries: moka::sync::Cache::builder()
                .max_capacity(max)
                .expire_after(PerEntryTtl)
                .build(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheGateway for MemoryStore {
    fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<CachedPayload> {
        let hit = self.entries.get(key);
        debug!(
            "cache {} for key {key}",
            if hit.is_some() { "hit" } else { "miss" }
        );
        hit.map(|entry| entry.payload)
    }

    fn put(&self, key: &str, value: CachedPayload, ttl: Duration) -> bool {
        self.entries.insert(
            key.to_string(),
            Entry {
                payload: value,
                ttl,
            },
        );
        true
    }

    fn forget(&self, key: &str) -> bool {
        self.entries.invalidate(key);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(names: &[&str]) -> CachedPayload {
        CachedPayload::Results(
            names
                .iter()
                .map(|name| {
                    crate::format::format_recipe(&crate::model::RawRecipe {
                        name: Some(name.to_string()),
                        ingredients: Some("sal".to_string()),
                        id: None,
                        image_url: None,
                        category: None,
                        preparation_steps: None,
                    })
                    .unwrap()
                })
                .collect(),
        )
    }

    #[test]
    fn test_put_get_has_forget() {
        let store = MemoryStore::new();
        assert!(!store.has("receitas:bolo"));
        assert!(store.get("receitas:bolo").is_none());

        assert!(store.put("receitas:bolo", results(&["Bolo"]), Duration::from_secs(60)));
        assert!(store.has("receitas:bolo"));
        match store.get("receitas:bolo") {
            Some(CachedPayload::Results(list)) => assert_eq!(list[0].name, "Bolo"),
            other => panic!("unexpected payload: {other:?}"),
        }

        assert!(store.forget("receitas:bolo"));
        assert!(!store.has("receitas:bolo"));
    }

    #[test]
    fn test_entries_expire_by_ttl() {
        let store = MemoryStore::new();
        store.put("receitas:sopa", results(&["Sopa"]), Duration::from_millis(50));
        assert!(store.get("receitas:sopa").is_some());

        std::thread::sleep(Duration::from_millis(120));
        assert!(store.get("receitas:sopa").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::new();
        store.put("receitas:bolo", results(&["Bolo A"]), Duration::from_secs(60));
        store.put("receitas:bolo", results(&["Bolo B"]), Duration::from_secs(60));
        match store.get("receitas:bolo") {
            Some(CachedPayload::Results(list)) => assert_eq!(list[0].name, "Bolo B"),
            other => panic!("unexpected payload: {other:?}"),
        }
    }
}
