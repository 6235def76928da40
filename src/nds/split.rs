//! Index-list utilities for the divide-and-conquer engine: splitting by a
//! pivot on one coordinate, order-preserving merges, and the lower median.

use super::types::Record;
use std::cmp::Ordering;

/// Index lists below, at, and above a pivot on one coordinate.
#[derive(Debug, Default)]
pub(crate) struct Split {
    pub(crate) less: Vec<usize>,
    pub(crate) equal: Vec<usize>,
    pub(crate) greater: Vec<usize>,
}

/// Partitions `indices` by comparing coordinate `axis` with `pivot`.
///
/// A single left-to-right scan, so every part keeps the order of `indices`.
pub(crate) fn split_by<T: PartialOrd>(
    records: &[Record<T>],
    indices: &[usize],
    pivot: &T,
    axis: usize,
) -> Split {
    let mut split = Split::default();
    for &index in indices {
        let value = &records[index].objectives[axis];
        if value < pivot {
            split.less.push(index);
        } else if value > pivot {
            split.greater.push(index);
        } else {
            split.equal.push(index);
        }
    }
    split
}

/// Merges two ascending index lists into one ascending list.
pub(crate) fn merge(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    merged
}

/// Returns `true` if every record in `indices` has the same value on `axis`.
pub(crate) fn has_single_value<T: PartialOrd>(
    records: &[Record<T>],
    indices: &[usize],
    axis: usize,
) -> bool {
    match indices.split_first() {
        Some((&first, rest)) => {
            let value = &records[first].objectives[axis];
            rest.iter().all(|&i| records[i].objectives[axis] == *value)
        }
        None => true,
    }
}

/// Minimum and maximum of coordinate `axis` over a non-empty `indices`.
pub(crate) fn value_range<'a, T: PartialOrd>(
    records: &'a [Record<T>],
    indices: &[usize],
    axis: usize,
) -> Option<(&'a T, &'a T)> {
    let (&first, rest) = indices.split_first()?;
    let start = &records[first].objectives[axis];

    Some(rest.iter().fold((start, start), |(min, max), &i| {
        let value = &records[i].objectives[axis];
        (
            if value < min { value } else { min },
            if value > max { value } else { max },
        )
    }))
}

/// Lower median of `values`.
///
/// For an odd count this is the middle value; for an even count, the
/// smaller of the two middle values. Runs in expected O(n) by selection.
/// Returns `None` for an empty collection.
///
/// Values must be mutually comparable; incomparable pairs are treated as
/// equal.
///
/// # Example
///
/// ```
/// use u_ndsort::nds::lower_median;
///
/// assert_eq!(lower_median(vec![5, 1, 4, 2]), Some(2));
/// assert_eq!(lower_median(vec![3, 1, 2]), Some(2));
/// assert_eq!(lower_median(Vec::<i32>::new()), None);
/// ```
pub fn lower_median<T: PartialOrd>(mut values: Vec<T>) -> Option<T> {
    if values.is_empty() {
        return None;
    }

    let middle = (values.len() - 1) / 2;
    values.select_nth_unstable_by(middle, compare);
    Some(values.swap_remove(middle))
}

/// Lower median of coordinate `axis` over `indices`, counting repeats.
pub(crate) fn median_of<T: PartialOrd + Clone>(
    records: &[Record<T>],
    indices: &[usize],
    axis: usize,
) -> Option<T> {
    let values: Vec<&T> = indices.iter().map(|&i| &records[i].objectives[axis]).collect();
    lower_median(values).cloned()
}

/// Lower median of the distinct values of coordinate `axis` over both
/// index lists.
pub(crate) fn distinct_median_of<T: PartialOrd + Clone>(
    records: &[Record<T>],
    first: &[usize],
    second: &[usize],
    axis: usize,
) -> Option<T> {
    let mut values: Vec<&T> = first
        .iter()
        .chain(second)
        .map(|&i| &records[i].objectives[axis])
        .collect();
    values.sort_unstable_by(|a, b| compare(a, b));
    values.dedup_by(|a, b| *a == *b);
    lower_median(values).cloned()
}

fn compare<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
