//! Shared data types: the working record and the sort output.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One distinct objective vector and its current front lower bound.
///
/// The engine addresses records by index and only ever raises `front`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Record<T> {
    pub(crate) objectives: Vec<T>,
    pub(crate) front: usize,
}

impl<T> Record<T> {
    pub(crate) fn new(objectives: Vec<T>) -> Self {
        Self {
            objectives,
            front: 0,
        }
    }

    /// Raises the front to at least `bound`.
    pub(crate) fn raise_front(&mut self, bound: usize) {
        self.front = self.front.max(bound);
    }
}

/// Result of a non-dominated sort.
///
/// The shape is selected by [`SortConfig::indices_only`](super::SortConfig::indices_only).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortOutput<D> {
    /// Decisions grouped by front: `fronts[k]` holds front `k` in the
    /// original input order. Front indices are contiguous by construction.
    Fronts(Vec<Vec<D>>),

    /// Front index of every decision, aligned with the input.
    Indices(Vec<usize>),
}

impl<D> SortOutput<D> {
    /// Number of fronts.
    pub fn front_count(&self) -> usize {
        match self {
            SortOutput::Fronts(fronts) => fronts.len(),
            SortOutput::Indices(indices) => indices.iter().max().map_or(0, |&max| max + 1),
        }
    }

    /// Returns the grouped decisions, or `None` for index output.
    pub fn into_fronts(self) -> Option<Vec<Vec<D>>> {
        match self {
            SortOutput::Fronts(fronts) => Some(fronts),
            SortOutput::Indices(_) => None,
        }
    }

    /// Returns the front indices, or `None` for grouped output.
    pub fn into_indices(self) -> Option<Vec<usize>> {
        match self {
            SortOutput::Fronts(_) => None,
            SortOutput::Indices(indices) => Some(indices),
        }
    }
}
