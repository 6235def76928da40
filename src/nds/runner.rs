//! Sort orchestration.
//!
//! Wires the stages together: projection → validation and deduplication →
//! divide-and-conquer ranking of the distinct vectors → expansion back to
//! the caller's decisions.

use super::config::SortConfig;
use super::dedup::UniqueObjectives;
use super::engine::assign_within;
use super::error::SortError;
use super::types::SortOutput;
use tracing::debug;

/// Non-dominated sort of arbitrary decisions.
///
/// `objective_of` projects each decision onto its objective vector; all
/// objectives are **minimized**. The output shape is chosen by
/// [`SortConfig::indices_only`].
///
/// # Errors
///
/// - [`SortError::EmptyInput`] if `decisions` is empty
/// - [`SortError::InsufficientObjectives`] if vectors have fewer than 2 objectives
/// - [`SortError::DimensionMismatch`] if vectors differ in length
/// - [`SortError::IncomparableValue`] if a value is not comparable (NaN)
///
/// # Example
///
/// ```
/// use u_ndsort::nds::{sort, SortConfig, SortOutput};
///
/// struct Plan {
///     name: &'static str,
///     cost: u32,
///     time: u32,
/// }
///
/// let plans = vec![
///     Plan { name: "slow", cost: 1, time: 9 },
///     Plan { name: "fast", cost: 9, time: 1 },
///     Plan { name: "bad", cost: 9, time: 9 },
/// ];
///
/// let output = sort(plans, |p| vec![p.cost, p.time], &SortConfig::default()).unwrap();
/// let SortOutput::Fronts(fronts) = output else { unreachable!() };
///
/// let names: Vec<Vec<&str>> = fronts
///     .iter()
///     .map(|front| front.iter().map(|p| p.name).collect())
///     .collect();
/// assert_eq!(names, vec![vec!["slow", "fast"], vec!["bad"]]);
/// ```
pub fn sort<D, T, F>(
    decisions: impl IntoIterator<Item = D>,
    mut objective_of: F,
    config: &SortConfig,
) -> Result<SortOutput<D>, SortError>
where
    T: PartialOrd + Clone,
    F: FnMut(&D) -> Vec<T>,
{
    let decisions: Vec<D> = decisions.into_iter().collect();
    let objectives: Vec<Vec<T>> = decisions.iter().map(&mut objective_of).collect();

    let fronts = rank(&objectives)?;

    if config.indices_only {
        Ok(SortOutput::Indices(fronts))
    } else {
        Ok(SortOutput::Fronts(group_by_front(decisions, &fronts)))
    }
}

/// Non-dominated sort of decisions that are their own objective vectors.
///
/// # Errors
///
/// The same validation errors as [`sort`].
///
/// # Example
///
/// ```
/// use u_ndsort::nds::{sort_vectors, SortConfig};
///
/// let population = vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]];
/// let output = sort_vectors(population, &SortConfig::indices()).unwrap();
/// assert_eq!(output.into_indices(), Some(vec![0, 1, 0]));
/// ```
pub fn sort_vectors<T: PartialOrd + Clone>(
    vectors: Vec<Vec<T>>,
    config: &SortConfig,
) -> Result<SortOutput<Vec<T>>, SortError> {
    let fronts = rank(&vectors)?;

    if config.indices_only {
        Ok(SortOutput::Indices(fronts))
    } else {
        Ok(SortOutput::Fronts(group_by_front(vectors, &fronts)))
    }
}

/// Groups decisions by front: `result[k]` is front `k`, in input order.
///
/// # Errors
///
/// The same validation errors as [`sort`].
pub fn non_dominated_sort<D, T, F>(
    decisions: impl IntoIterator<Item = D>,
    objective_of: F,
) -> Result<Vec<Vec<D>>, SortError>
where
    T: PartialOrd + Clone,
    F: FnMut(&D) -> Vec<T>,
{
    let decisions: Vec<D> = decisions.into_iter().collect();
    let objectives: Vec<Vec<T>> = decisions.iter().map(objective_of).collect();
    let fronts = rank(&objectives)?;
    Ok(group_by_front(decisions, &fronts))
}

/// Front index of every decision, aligned with `decisions`.
///
/// # Errors
///
/// The same validation errors as [`sort`].
pub fn front_indices<D, T, F>(decisions: &[D], objective_of: F) -> Result<Vec<usize>, SortError>
where
    T: PartialOrd + Clone,
    F: FnMut(&D) -> Vec<T>,
{
    let objectives: Vec<Vec<T>> = decisions.iter().map(objective_of).collect();
    rank(&objectives)
}

/// Ranks objective vectors, returning one front per input position.
fn rank<T: PartialOrd + Clone>(objectives: &[Vec<T>]) -> Result<Vec<usize>, SortError> {
    let mut unique = UniqueObjectives::build(objectives).inspect_err(|err| {
        debug!(decisions = objectives.len(), error = %err, "rejected non-dominated sort input");
    })?;

    let indices: Vec<usize> = (0..unique.records.len()).collect();
    assign_within(&mut unique.records, &indices, unique.dimension);

    let fronts = unique.fronts_by_position();
    debug!(
        decisions = objectives.len(),
        distinct = unique.records.len(),
        objectives = unique.dimension,
        fronts = unique.records.iter().map(|r| r.front + 1).max().unwrap_or(0),
        "non-dominated sort complete"
    );

    Ok(fronts)
}

fn group_by_front<D>(decisions: Vec<D>, fronts: &[usize]) -> Vec<Vec<D>> {
    let count = fronts.iter().max().map_or(0, |&max| max + 1);
    let mut grouped: Vec<Vec<D>> = (0..count).map(|_| Vec::new()).collect();
    for (decision, &front) in decisions.into_iter().zip(fronts) {
        grouped[front].push(decision);
    }
    grouped
}
