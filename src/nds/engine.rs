//! Divide-and-conquer front assignment.
//!
//! Two mutually recursive procedures over a fixed slice of lexicographically
//! sorted [`Record`]s, addressed by index:
//!
//! - [`assign_within`] ranks a set of records among themselves;
//! - [`assign_across`] raises the fronts of one set for domination by
//!   another, already ranked set.
//!
//! Only the first `m` coordinates take part at a given depth. Splitting on
//! coordinate `m - 1` at its lower median reduces every problem towards the
//! two-coordinate line-sweep in [`sweep`](super::sweep).
//!
//! Index lists are always ascending, which keeps them in lexicographic
//! order of the records; splits and merges preserve this.
//!
//! # Complexity
//!
//! O(N · (log N)^(M-1)) for N distinct vectors and M objectives.

use super::dominance::{dominates_or_equal_prefix, dominates_prefix};
use super::split::{distinct_median_of, has_single_value, median_of, merge, split_by, value_range};
use super::sweep::{sweep_across, sweep_within};
use super::types::Record;

/// Ranks the records in `indices` among themselves on the first `m`
/// coordinates.
pub(crate) fn assign_within<T: PartialOrd + Clone>(records: &mut [Record<T>], indices: &[usize], m: usize) {
    debug_assert!(m >= 2);

    match *indices {
        [] | [_] => {}
        [first, second] => {
            // `first` precedes `second` lexicographically, so the reverse
            // cannot hold.
            if dominates_prefix(&records[first].objectives, &records[second].objectives, m) {
                let bound = records[first].front + 1;
                records[second].raise_front(bound);
            }
        }
        _ if m == 2 => sweep_within(records, indices),
        _ => {
            let axis = m - 1;
            if has_single_value(records, indices, axis) {
                assign_within(records, indices, axis);
                return;
            }

            let median = median_of(records, indices, axis)
                .expect("indices has more than two elements; never empty");
            let split = split_by(records, indices, &median, axis);

            assign_within(records, &split.less, m);
            assign_across(records, &split.less, &split.equal, axis);
            assign_within(records, &split.equal, axis);
            let less_or_equal = merge(&split.less, &split.equal);
            assign_across(records, &less_or_equal, &split.greater, axis);
            assign_within(records, &split.greater, m);
        }
    }
}

/// Raises the fronts of `assign` for domination by the ranked `comp`, on
/// the first `m` coordinates.
///
/// Every `comp` record must already have its final front relative to the
/// records that can dominate it.
pub(crate) fn assign_across<T: PartialOrd + Clone>(
    records: &mut [Record<T>],
    comp: &[usize],
    assign: &[usize],
    m: usize,
) {
    debug_assert!(m >= 2);

    if comp.is_empty() || assign.is_empty() {
        return;
    }

    if comp.len() == 1 || assign.len() == 1 {
        for &a in assign {
            for &c in comp {
                if dominates_or_equal_prefix(&records[c].objectives, &records[a].objectives, m) {
                    let bound = records[c].front + 1;
                    records[a].raise_front(bound);
                }
            }
        }
        return;
    }

    if m == 2 {
        sweep_across(records, comp, assign);
        return;
    }

    let axis = m - 1;
    let (min_comp, max_comp) =
        value_range(records, comp, axis).expect("comp has at least two elements; never empty");
    let (min_assign, max_assign) =
        value_range(records, assign, axis).expect("assign has at least two elements; never empty");

    if max_comp <= min_assign {
        assign_across(records, comp, assign, axis);
    } else if min_comp <= max_assign {
        let median = distinct_median_of(records, comp, assign, axis)
            .expect("comp and assign have at least two elements; never empty");
        let comp_split = split_by(records, comp, &median, axis);
        let assign_split = split_by(records, assign, &median, axis);

        assign_across(records, &comp_split.less, &assign_split.less, m);
        assign_across(records, &comp_split.less, &assign_split.equal, axis);
        assign_across(records, &comp_split.equal, &assign_split.equal, axis);
        let less_or_equal = merge(&comp_split.less, &comp_split.equal);
        assign_across(records, &less_or_equal, &assign_split.greater, axis);
        assign_across(records, &comp_split.greater, &assign_split.greater, m);
    }
    // Otherwise every `comp` value exceeds every `assign` value on `axis`.
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(values: &[&[i32]]) -> Vec<usize> {
        let mut recs: Vec<Record<i32>> = values.iter().map(|v| Record::new(v.to_vec())).collect();
        recs.sort_by(|a, b| a.objectives.cmp(&b.objectives));
        let sorted: Vec<Vec<i32>> = recs.iter().map(|r| r.objectives.clone()).collect();

        let indices: Vec<usize> = (0..recs.len()).collect();
        let m = values[0].len();
        assign_within(&mut recs, &indices, m);

        // report in the caller's order
        values
            .iter()
            .map(|v| {
                let pos = sorted.iter().position(|s| s.as_slice() == *v).unwrap();
                recs[pos].front
            })
            .collect()
    }

    #[test]
    fn test_pair_dominance() {
        assert_eq!(ranked(&[&[0, 0, 0], &[1, 1, 1]]), vec![0, 1]);
        assert_eq!(ranked(&[&[0, 1, 0], &[1, 0, 1]]), vec![0, 0]);
    }

    #[test]
    fn test_chain_four_objectives() {
        let values: Vec<Vec<i32>> = (0..8).rev().map(|i| vec![i; 4]).collect();
        let refs: Vec<&[i32]> = values.iter().map(|v| v.as_slice()).collect();
        assert_eq!(ranked(&refs), vec![7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_constant_last_coordinate_is_dropped() {
        let fronts = ranked(&[&[1, 5, 2], &[3, 3, 2], &[5, 1, 2], &[4, 4, 2], &[6, 6, 2]]);
        assert_eq!(fronts, vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_three_objectives_mixed() {
        let fronts = ranked(&[
            &[1, 5, 3],
            &[3, 1, 5],
            &[5, 3, 1],
            &[4, 4, 4],
            &[2, 6, 4],
            &[6, 6, 6],
            &[0, 9, 9],
        ]);
        // (2,6,4) dominated by (1,5,3); (6,6,6) dominated by (4,4,4) and (2,6,4)
        assert_eq!(fronts, vec![0, 0, 0, 0, 1, 2, 0]);
    }

    #[test]
    fn test_tie_on_split_axis() {
        // Equal on the last coordinate, separated only on the first two.
        let fronts = ranked(&[&[0, 0, 1], &[1, 1, 1], &[2, 2, 1], &[0, 3, 0], &[3, 0, 2]]);
        assert_eq!(fronts, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_across_singleton_counts_equal_prefix() {
        // Equal on the first two coordinates; separated on the dropped third.
        let mut recs = vec![Record::new(vec![1, 1, 0]), Record::new(vec![1, 1, 5])];
        recs[0].front = 2;
        assign_across(&mut recs, &[0], &[1], 2);
        assert_eq!(recs[1].front, 3);
    }

    #[test]
    fn test_across_comp_above_assign_is_noop() {
        let mut recs = vec![
            Record::new(vec![0, 0, 0]),
            Record::new(vec![0, 1, 1]),
            Record::new(vec![1, 0, 5]),
            Record::new(vec![1, 1, 6]),
        ];
        assign_across(&mut recs, &[2, 3], &[0, 1], 3);
        assert!(recs.iter().all(|r| r.front == 0));
    }

    #[test]
    fn test_across_overlapping_ranges_splits() {
        // Last coordinates interleave: comp {2, 1}, assign {0, 3}.
        let mut recs = vec![
            Record::new(vec![0, 0, 2]),
            Record::new(vec![1, 3, 0]),
            Record::new(vec![2, 1, 1]),
            Record::new(vec![3, 4, 3]),
        ];
        recs[2].front = 1;
        assign_across(&mut recs, &[0, 2], &[1, 3], 3);
        assert_eq!(recs[1].front, 0);
        // (3,4,3) is dominated by (0,0,2)@0 and (2,1,1)@1
        assert_eq!(recs[3].front, 2);
    }

    #[test]
    fn test_within_splits_until_sweep() {
        let values: Vec<Vec<i32>> = (0..64).map(|i| vec![i % 8, 7 - i % 8, i / 8]).collect();
        let refs: Vec<&[i32]> = values.iter().map(|v| v.as_slice()).collect();
        // each layer of eight is one trade-off front, dominated by the layer below
        let expected: Vec<usize> = (0..64).map(|i| i / 8).collect();
        assert_eq!(ranked(&refs), expected);
    }
}
