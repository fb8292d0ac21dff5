//! Sequence equality
//!
//! Element-wise comparison of two optional sequences. An absent sequence
//! counts as empty, so `None` and `Some(&[])` compare equal.

use thiserror::Error;

/// Reason two sequences are not equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListMismatch {
    /// The sequences have different lengths
    #[error("Length mismatch: left has {left} elements, right has {right}")]
    Length { left: usize, right: usize },
    /// First index at which the elements differ
    #[error("Element mismatch at index {index}")]
    Element { index: usize },
}

/// Compare two sequences, reporting the first difference
///
/// Lengths are checked before any element is compared.
///
/// # Examples
///
/// ```rust
/// use collection_utils::{ListMismatch, compare_lists};
///
/// assert_eq!(compare_lists(Some(&[1, 2, 3][..]), Some(&[1, 2, 3][..])), Ok(()));
/// assert_eq!(
///     compare_lists(Some(&[1, 2][..]), Some(&[1, 2, 3][..])),
///     Err(ListMismatch::Length { left: 2, right: 3 })
/// );
/// assert_eq!(
///     compare_lists(Some(&[1, 2, 3][..]), Some(&[1, 2, 4][..])),
///     Err(ListMismatch::Element { index: 2 })
/// );
/// ```
pub fn compare_lists<T>(a: Option<&[T]>, b: Option<&[T]>) -> Result<(), ListMismatch>
where
    T: PartialEq,
{
    let a = a.unwrap_or_default();
    let b = b.unwrap_or_default();

    if a.len() != b.len() {
        return Err(ListMismatch::Length {
            left: a.len(),
            right: b.len(),
        });
    }

    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(index) => Err(ListMismatch::Element { index }),
        None => Ok(()),
    }
}

/// Check two sequences for element-wise equality
///
/// True iff both have the same length and equal elements at every index.
/// An absent sequence is treated as empty.
pub fn list_equal<T>(a: Option<&[T]>, b: Option<&[T]>) -> bool
where
    T: PartialEq,
{
    compare_lists(a, b).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: Option<&[i32]> = None;

    // =========================================================================
    // list_equal tests
    // =========================================================================

    #[test]
    fn test_list_equal_both_nil() {
        assert!(list_equal(NONE, NONE));
    }

    #[test]
    fn test_list_equal_nil_and_empty() {
        // Absent and empty are both "no elements"
        assert!(list_equal(NONE, Some(&[][..])));
        assert!(list_equal(Some(&[][..]), NONE));
    }

    #[test]
    fn test_list_equal_same_elements() {
        assert!(list_equal(Some(&[1, 2, 3][..]), Some(&[1, 2, 3][..])));
    }

    #[test]
    fn test_list_equal_different_length() {
        assert!(!list_equal(Some(&[1, 2][..]), Some(&[1, 2, 3][..])));
    }

    #[test]
    fn test_list_equal_different_element() {
        assert!(!list_equal(Some(&[1, 2, 3][..]), Some(&[1, 2, 4][..])));
    }

    #[test]
    fn test_list_equal_nil_and_non_empty() {
        assert!(!list_equal(NONE, Some(&[1][..])));
    }

    // =========================================================================
    // compare_lists tests
    // =========================================================================

    #[test]
    fn test_compare_lists_length_checked_first() {
        let result = compare_lists(Some(&[9, 2][..]), Some(&[1, 2, 3][..]));
        assert_eq!(result, Err(ListMismatch::Length { left: 2, right: 3 }));
    }

    #[test]
    fn test_compare_lists_first_mismatch() {
        let result = compare_lists(Some(&["a", "b", "c"][..]), Some(&["a", "x", "y"][..]));
        assert_eq!(result, Err(ListMismatch::Element { index: 1 }));
    }

    #[test]
    fn test_compare_lists_nil_vs_non_empty() {
        let result = compare_lists(NONE, Some(&[1, 2][..]));
        assert_eq!(result, Err(ListMismatch::Length { left: 0, right: 2 }));
    }

    #[test]
    fn test_list_mismatch_display() {
        let length = ListMismatch::Length { left: 2, right: 3 };
        let element = ListMismatch::Element { index: 4 };

        assert_eq!(
            length.to_string(),
            "Length mismatch: left has 2 elements, right has 3"
        );
        assert_eq!(element.to_string(), "Element mismatch at index 4");
    }
}
