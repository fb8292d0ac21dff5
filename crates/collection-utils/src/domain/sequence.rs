//! Element-wise sequence operations
//!
//! Filtering, projection, existence checks and deduplication over slices.
//! Every function borrows its input and returns a newly allocated `Vec`.

use crate::domain::hasher::seen_set_with_capacity;
use std::hash::Hash;

/// Keep the elements matching `predicate`, in their original order
///
/// Always returns a `Vec`, empty when nothing matches.
///
/// # Examples
///
/// ```rust
/// use collection_utils::filter;
///
/// let evens = filter(&[1, 2, 3, 4], |n| n % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<T, F>(list: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    list.iter().filter(|t| predicate(t)).cloned().collect()
}

/// Drop the absent entries of a list of optional references
///
/// Present entries are passed through as-is: for `Option<&U>`, `Option<Rc<U>>`
/// or `Option<Arc<U>>` only the handle is cloned, so the result points at the
/// same objects as the input.
///
/// # Examples
///
/// ```rust
/// use collection_utils::filter_not_nil;
///
/// let (a, b) = (String::from("a"), String::from("b"));
/// let list = [None, Some(&a), None, Some(&b)];
///
/// let present = filter_not_nil(&list);
/// assert_eq!(present, vec![&a, &b]);
/// assert!(std::ptr::eq(present[0], &a));
/// ```
pub fn filter_not_nil<T>(list: &[Option<T>]) -> Vec<T>
where
    T: Clone,
{
    list.iter().flatten().cloned().collect()
}

/// Apply `projection` to every element
///
/// The result has the same length as the input and `out[i] == projection(&list[i])`.
pub fn map<T, R, F>(list: &[T], projection: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    let mut result = Vec::with_capacity(list.len());
    result.extend(list.iter().map(projection));
    result
}

/// Check whether at least one element satisfies `predicate`
///
/// Stops at the first match. An empty list yields `false`.
pub fn any<T, F>(list: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    list.iter().any(predicate)
}

/// Remove duplicate values, keeping the first occurrence of each
///
/// The seen-set borrows from `list`, so only the kept elements are cloned.
///
/// # Examples
///
/// ```rust
/// use collection_utils::distinct;
///
/// assert_eq!(distinct(&["xd", "xd", "xd"]), vec!["xd"]);
/// assert_eq!(distinct(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn distinct<T>(list: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = seen_set_with_capacity(list.len());
    let mut result = Vec::new();

    for t in list {
        if seen.insert(t) {
            result.push(t.clone());
        }
    }

    result
}
