//! Grouping operations
//!
//! Partition a sequence into groups by a projected key. Within a group,
//! elements keep the order they had in the input.

use crate::domain::hasher::{GroupMap, HashTable};
use std::hash::Hash;

/// Group elements by the key returned from `key_fn`
///
/// Each element is appended to the group of its key; the group is created on
/// the key's first occurrence. Iteration order of the returned map is
/// unspecified. Use [`group_in_order`] when key order matters.
///
/// # Examples
///
/// ```rust
/// use collection_utils::to_map;
///
/// let groups = to_map(&["xd", "xdd", "xddd", "aa"], |s| s.len());
///
/// assert_eq!(groups[&2], vec!["xd", "aa"]);
/// assert_eq!(groups[&3], vec!["xdd"]);
/// assert_eq!(groups[&4], vec!["xddd"]);
/// ```
pub fn to_map<T, K, F>(list: &[T], mut key_fn: F) -> GroupMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut result = GroupMap::default();

    for t in list {
        result.entry(key_fn(t)).or_insert_with(Vec::new).push(t.clone());
    }

    result
}

/// Group elements by key, listing groups in first-encounter order of their key
///
/// Produces the same groups as [`to_map`]. Concatenating the groups yields a
/// permutation of `list` that is stable within every group.
pub fn group_in_order<T, K, F>(list: &[T], mut key_fn: F) -> Vec<(K, Vec<T>)>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    // key -> position in `groups`
    let mut slots: HashTable<K, usize> = HashTable::default();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for t in list {
        let key = key_fn(t);
        match slots.get(&key) {
            Some(&slot) => groups[slot].1.push(t.clone()),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push((key, vec![t.clone()]));
            }
        }
    }

    groups
}
