// conferia-core/src/infrastructure/cache.rs

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::table::Table;

/// Session-scoped table cache keyed by source identifier. No TTL and no
/// invalidation: entries live until the process exits. Racing misses write
/// value-equal tables for the same key, so last-write-wins is safe.
///
/// Injectable on purpose: tests hand the loader a fresh cache instead of
/// fighting a process-wide memo.
#[derive(Default)]
pub struct TableCache {
    entries: RwLock<HashMap<String, Arc<Table>>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source: &str) -> Option<Arc<Table>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(source)
            .cloned()
    }

    pub fn insert(&self, source: &str, table: Table) -> Arc<Table> {
        let shared = Arc::new(table);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(source.to_string(), Arc::clone(&shared));
        shared
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> Table {
        Table::new(vec!["a".into()], vec![vec!["1".into()]])
    }

    #[test]
    fn test_miss_then_hit() {
        let cache = TableCache::new();
        assert!(cache.get("s1").is_none());

        cache.insert("s1", small_table());
        let hit = cache.get("s1");
        assert!(hit.is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_same_key_overwrites() {
        let cache = TableCache::new();
        cache.insert("s1", small_table());
        cache.insert("s1", small_table());
        assert_eq!(cache.len(), 1);
    }
}
