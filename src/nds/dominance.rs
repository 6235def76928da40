//! Pareto dominance between objective vectors.
//!
//! All objectives are **minimized**: `a` dominates `b` when it is no worse
//! in every objective and strictly better in at least one.

use super::error::SortError;

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (incomparable or equal).
    Neither,
}

/// Returns `true` if `left` dominates `right`.
///
/// # Errors
///
/// Returns [`SortError::LengthMismatch`] if the vectors differ in length.
///
/// # Example
///
/// ```
/// use u_ndsort::nds::dominates;
///
/// assert_eq!(dominates(&[1, 2], &[1, 3]), Ok(true));
/// assert_eq!(dominates(&[1, 2], &[1, 2]), Ok(false));
/// assert_eq!(dominates(&[0, 5], &[1, 3]), Ok(false));
/// ```
pub fn dominates<T: PartialOrd>(left: &[T], right: &[T]) -> Result<bool, SortError> {
    check_lengths(left, right)?;
    Ok(dominates_prefix(left, right, left.len()))
}

/// Three-way dominance comparison.
///
/// # Errors
///
/// Returns [`SortError::LengthMismatch`] if the vectors differ in length.
pub fn dominance<T: PartialOrd>(left: &[T], right: &[T]) -> Result<Dominance, SortError> {
    check_lengths(left, right)?;

    let mut left_better_in_some = false;
    let mut right_better_in_some = false;

    for (l, r) in left.iter().zip(right) {
        if l < r {
            left_better_in_some = true;
        } else if r < l {
            right_better_in_some = true;
        }
    }

    Ok(match (left_better_in_some, right_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    })
}

fn check_lengths<T>(left: &[T], right: &[T]) -> Result<(), SortError> {
    if left.len() == right.len() {
        Ok(())
    } else {
        Err(SortError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        })
    }
}

/// Dominance on the first `m` coordinates only.
pub(crate) fn dominates_prefix<T: PartialOrd>(left: &[T], right: &[T], m: usize) -> bool {
    debug_assert!(left.len() >= m && right.len() >= m);

    let mut strictly_better = false;
    for (l, r) in left[..m].iter().zip(&right[..m]) {
        if l > r {
            return false;
        }
        if l < r {
            strictly_better = true;
        }
    }
    strictly_better
}

/// `left <= right` on each of the first `m` coordinates. Equal prefixes
/// count.
pub(crate) fn dominates_or_equal_prefix<T: PartialOrd>(left: &[T], right: &[T], m: usize) -> bool {
    debug_assert!(left.len() >= m && right.len() >= m);
    left[..m].iter().zip(&right[..m]).all(|(l, r)| l <= r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominates_strict_in_one_axis() {
        assert_eq!(dominates(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]), Ok(true));
        assert_eq!(dominates(&[1.0, 2.0, 4.0], &[1.0, 2.0, 3.0]), Ok(false));
    }

    #[test]
    fn test_equal_vectors_do_not_dominate() {
        assert_eq!(dominates(&[3, 3], &[3, 3]), Ok(false));
        assert_eq!(dominance(&[3, 3], &[3, 3]), Ok(Dominance::Neither));
    }

    #[test]
    fn test_trade_off_is_neither() {
        assert_eq!(dominates(&[1, 5], &[5, 1]), Ok(false));
        assert_eq!(dominates(&[5, 1], &[1, 5]), Ok(false));
        assert_eq!(dominance(&[1, 5], &[5, 1]), Ok(Dominance::Neither));
    }

    #[test]
    fn test_three_way() {
        assert_eq!(dominance(&[1, 1], &[2, 2]), Ok(Dominance::Left));
        assert_eq!(dominance(&[2, 2], &[1, 2]), Ok(Dominance::Right));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            dominates(&[1, 2], &[1, 2, 3]),
            Err(SortError::LengthMismatch { left: 2, right: 3 })
        );
        assert!(dominance(&[1, 2, 3], &[1]).is_err());
    }

    #[test]
    fn test_prefix_ignores_trailing_coordinates() {
        let a = [1, 1, 9];
        let b = [2, 1, 0];
        assert!(dominates_prefix(&a, &b, 2));
        assert!(!dominates_prefix(&a, &b, 3));
        assert!(dominates_or_equal_prefix(&[1, 1, 9], &[1, 1, 0], 2));
        assert!(!dominates_prefix(&[1, 1, 9], &[1, 1, 0], 2));
    }
}
