//! collection-utils - Generic helpers over sequences and key-value mappings
//!
//! This crate provides functionality to:
//! - Filter, project and deduplicate slices while preserving input order
//! - Drop absent entries from lists of optional references
//! - Group elements by a projected key
//! - Compare optional sequences element-wise, treating absent as empty
//!
//! All operations are single-pass, allocate only their result and never
//! mutate their input.

pub mod domain;

// Re-export commonly used items
pub use domain::equality::{ListMismatch, compare_lists, list_equal};
pub use domain::grouping::{group_in_order, to_map};
pub use domain::hasher::{GroupMap, HashTable};
pub use domain::sequence::{any, distinct, filter, filter_not_nil, map};
