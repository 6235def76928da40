//! Validation and deduplication of objective vectors.
//!
//! Decisions sharing an identical objective vector are ranked once: the
//! engine works on one [`Record`] per distinct vector, and the preimage
//! lists map every record back to the input positions that produced it.

use super::error::SortError;
use super::types::Record;
use std::cmp::Ordering;

/// Distinct objective vectors in ascending lexicographic order, with
/// their preimages.
#[derive(Debug)]
pub(crate) struct UniqueObjectives<T> {
    /// One record per distinct vector, sorted lexicographically.
    pub(crate) records: Vec<Record<T>>,
    /// Input positions of each record, ascending.
    pub(crate) preimages: Vec<Vec<usize>>,
    /// Number of objectives per vector.
    pub(crate) dimension: usize,
    input_len: usize,
}

impl<T: PartialOrd + Clone> UniqueObjectives<T> {
    /// Validates `objectives` and groups them by value.
    pub(crate) fn build(objectives: &[Vec<T>]) -> Result<Self, SortError> {
        let dimension = validate(objectives)?;

        // Stable, so each preimage list stays in input order.
        let mut order: Vec<usize> = (0..objectives.len()).collect();
        order.sort_by(|&a, &b| lexicographic(&objectives[a], &objectives[b]));

        let mut records: Vec<Record<T>> = Vec::new();
        let mut preimages: Vec<Vec<usize>> = Vec::new();

        for &position in &order {
            let vector = &objectives[position];
            match (records.last(), preimages.last_mut()) {
                (Some(last), Some(positions)) if last.objectives == *vector => {
                    positions.push(position);
                }
                _ => {
                    records.push(Record::new(vector.clone()));
                    preimages.push(vec![position]);
                }
            }
        }

        Ok(Self {
            records,
            preimages,
            dimension,
            input_len: objectives.len(),
        })
    }
}

impl<T> UniqueObjectives<T> {
    /// Expands record fronts back to one front per input position.
    pub(crate) fn fronts_by_position(&self) -> Vec<usize> {
        let mut fronts = vec![0; self.input_len];
        for (record, positions) in self.records.iter().zip(&self.preimages) {
            for &position in positions {
                fronts[position] = record.front;
            }
        }
        fronts
    }
}

/// Checks the shape and comparability of `objectives`, returning the
/// shared dimension.
pub(crate) fn validate<T: PartialOrd>(objectives: &[Vec<T>]) -> Result<usize, SortError> {
    let first = objectives.first().ok_or(SortError::EmptyInput)?;

    let dimension = first.len();
    if dimension < 2 {
        return Err(SortError::InsufficientObjectives { dimension });
    }

    let mismatched: Vec<usize> = objectives
        .iter()
        .enumerate()
        .filter(|(_, vector)| vector.len() != dimension)
        .map(|(position, _)| position)
        .collect();
    if !mismatched.is_empty() {
        return Err(SortError::DimensionMismatch {
            expected: dimension,
            positions: mismatched,
        });
    }

    for (position, vector) in objectives.iter().enumerate() {
        if let Some(objective) = vector.iter().position(|v| v.partial_cmp(v).is_none()) {
            return Err(SortError::IncomparableValue {
                position,
                objective,
            });
        }
    }

    Ok(dimension)
}

/// Lexicographic order of validated vectors.
pub(crate) fn lexicographic<T: PartialOrd>(a: &[T], b: &[T]) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
