//! Quadratic reference sort.
//!
//! The classic fast non-dominated sort (Deb et al., 2002), kept as a
//! baseline for benchmarks and as an oracle for the divide-and-conquer
//! engine.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use super::dedup::validate;
use super::dominance::{dominance, Dominance};
use super::error::SortError;

/// Fast non-dominated sorting by pairwise comparison.
///
/// Returns the front index of each vector, aligned with `objectives`.
/// Produces the same ranks as [`sort`](super::sort).
///
/// # Complexity
///
/// O(M · N²) where M = number of objectives, N = number of vectors.
///
/// # Errors
///
/// The same validation errors as [`sort`](super::sort).
///
/// # Example
///
/// ```
/// use u_ndsort::nds::fast_non_dominated_sort;
///
/// let objectives = vec![
///     vec![1.0, 5.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
///     vec![4.0, 4.0], // dominated by (3, 3)
/// ];
///
/// let ranks = fast_non_dominated_sort(&objectives).unwrap();
/// assert_eq!(ranks, vec![0, 0, 0, 1]);
/// ```
pub fn fast_non_dominated_sort<T: PartialOrd>(objectives: &[Vec<T>]) -> Result<Vec<usize>, SortError> {
    validate(objectives)?;

    let n = objectives.len();
    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut current = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance(&objectives[i], &objectives[j])? {
                Dominance::Left => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        if domination_count[i] == 0 {
            current.push(i);
        }
    }

    let mut rank = 0;
    while !current.is_empty() {
        let mut next = Vec::new();
        for &i in &current {
            ranks[i] = rank;
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        current = next;
        rank += 1;
    }

    Ok(ranks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_solution() {
        let objs = vec![vec![1.0, 2.0]];
        assert_eq!(fast_non_dominated_sort(&objs), Ok(vec![0]));
    }

    #[test]
    fn test_clear_dominance() {
        let objs = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]];
        assert_eq!(fast_non_dominated_sort(&objs), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn test_mixed_fronts() {
        let objs = vec![
            vec![1.0, 5.0],
            vec![3.0, 3.0],
            vec![5.0, 1.0],
            vec![4.0, 4.0], // dominated by (3,3)
            vec![6.0, 6.0], // dominated by (4,4)
        ];
        assert_eq!(fast_non_dominated_sort(&objs), Ok(vec![0, 0, 0, 1, 2]));
    }

    #[test]
    fn test_all_equal() {
        let objs = vec![vec![2, 2], vec![2, 2], vec![2, 2]];
        assert_eq!(fast_non_dominated_sort(&objs), Ok(vec![0, 0, 0]));
    }

    #[test]
    fn test_validation() {
        let objs: Vec<Vec<f64>> = Vec::new();
        assert_eq!(fast_non_dominated_sort(&objs), Err(SortError::EmptyInput));
        assert!(fast_non_dominated_sort(&[vec![1, 2], vec![1]]).is_err());
    }
}
