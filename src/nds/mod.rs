//! Non-dominated sorting.
//!
//! Partitions a population into Pareto fronts: front 0 holds the
//! non-dominated vectors, front k+1 the vectors dominated only by members
//! of fronts ≤ k. All objectives are **minimized**, and equal objective
//! vectors always share a front.
//!
//! # Algorithm
//!
//! A divide-and-conquer sort (generalized Jensen, in the provably fast
//! form of Buzdalov & Shalyto):
//!
//! 1. Project decisions to objective vectors, validate, and deduplicate
//! 2. Sort the distinct vectors lexicographically
//! 3. Recursively split on the last remaining objective at its lower
//!    median, ranking within and across the parts
//! 4. Finish two-objective subproblems with an O(n log n) line-sweep
//! 5. Expand the fronts back to every decision
//!
//! # Complexity
//!
//! O(N · (log N)^(M-1)) for N distinct vectors and M objectives, against
//! O(M · N²) for [`fast_non_dominated_sort`].
//!
//! # Key Types
//!
//! - [`SortConfig`]: output shape (grouped decisions or front indices)
//! - [`SortOutput`]: the ranked result
//! - [`SortError`]: input validation failures
//!
//! # References
//!
//! - Buzdalov & Shalyto (2015), "A Provably Asymptotically Fast Version of the
//!   Generalized Jensen Algorithm for Non-dominated Sorting", PPSN XIII, LNCS 8672
//! - Jensen (2003), "Reducing the Run-Time Complexity of Multiobjective EAs:
//!   The NSGA-II and Other Algorithms", IEEE TEVC 7(5)
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod dedup;
mod dominance;
mod engine;
mod error;
mod reference;
mod runner;
mod split;
mod sweep;
mod types;

pub use config::SortConfig;
pub use dominance::{dominance, dominates, Dominance};
pub use error::SortError;
pub use reference::fast_non_dominated_sort;
pub use runner::{front_indices, non_dominated_sort, sort, sort_vectors};
pub use split::lower_median;
pub use types::SortOutput;
