//! Hash container selection
//!
//! The `fx-hash` feature switches grouping and deduplication to rustc-hash's
//! Fx hasher. Without it the std `RandomState` containers are used.

#[cfg(feature = "fx-hash")]
use rustc_hash::{FxHashMap, FxHashSet};

#[cfg(not(feature = "fx-hash"))]
use std::collections::{HashMap, HashSet};

/// Hash map with the feature-selected hasher
#[cfg(feature = "fx-hash")]
pub type HashTable<K, V> = FxHashMap<K, V>;

/// Hash map with the feature-selected hasher
#[cfg(not(feature = "fx-hash"))]
pub type HashTable<K, V> = HashMap<K, V>;

/// Key → group mapping returned by [`to_map`](crate::domain::grouping::to_map)
pub type GroupMap<K, T> = HashTable<K, Vec<T>>;

/// Set used to track already-seen values
#[cfg(feature = "fx-hash")]
pub(crate) type SeenSet<T> = FxHashSet<T>;

#[cfg(not(feature = "fx-hash"))]
pub(crate) type SeenSet<T> = HashSet<T>;

/// Create an empty seen-set with room for `capacity` values
pub(crate) fn seen_set_with_capacity<T>(capacity: usize) -> SeenSet<T> {
    SeenSet::with_capacity_and_hasher(capacity, Default::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_map_default_is_empty() {
        let map: GroupMap<u32, &str> = GroupMap::default();
        assert!(map.is_empty());
    }

    #[test]
    fn test_seen_set_with_capacity() {
        let seen: SeenSet<u64> = seen_set_with_capacity(16);
        assert!(seen.is_empty());
        assert!(seen.capacity() >= 16);
    }

    #[test]
    fn test_seen_set_insert_reports_novelty() {
        let mut seen: SeenSet<&str> = seen_set_with_capacity(2);
        assert!(seen.insert("xd"));
        assert!(!seen.insert("xd"));
        assert_eq!(seen.len(), 1);
    }
}
