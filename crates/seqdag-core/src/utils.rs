//! Small slice helpers shared by construction and search.

/// Length of the longest common prefix of two slices.
///
/// # Examples
/// ```
/// use seqdag_core::utils::common_prefix_len;
/// assert_eq!(common_prefix_len(b"care", b"cars"), 3);
/// assert_eq!(common_prefix_len(b"car", b"dog"), 0);
/// ```
pub fn common_prefix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Remove the first occurrence of `value`, returning whether one was found.
///
/// Order of the remaining elements is preserved.
pub fn remove_first<T: PartialEq>(items: &mut Vec<T>, value: &T) -> bool {
    match items.iter().position(|item| item == value) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
