//! Two-objective line-sweep, the base case of the engine.
//!
//! Both variants expect their index lists in ascending lexicographic order
//! of the records, and only look at the first two coordinates. They keep a
//! [`Staircase`]: fronts keyed by strictly increasing second coordinate,
//! with the fronts strictly increasing as well, so the highest front among
//! members with `y <= v` is the last such member.

use super::types::Record;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Second-coordinate key, totally ordered once values are validated.
#[derive(Debug, Clone)]
struct Coordinate<T>(T);

impl<T: PartialOrd> PartialEq for Coordinate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: PartialOrd> Eq for Coordinate<T> {}

impl<T: PartialOrd> PartialOrd for Coordinate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialOrd> Ord for Coordinate<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

/// Fronts of the sweep so far, keyed by second coordinate.
#[derive(Debug)]
struct Staircase<T> {
    steps: BTreeMap<Coordinate<T>, usize>,
}

impl<T: PartialOrd + Clone> Staircase<T> {
    fn new() -> Self {
        Self {
            steps: BTreeMap::new(),
        }
    }

    /// Highest front among members whose second coordinate is `<= y`.
    fn max_front_at_or_below(&self, y: &T) -> Option<usize> {
        self.steps
            .range(..=Coordinate(y.clone()))
            .next_back()
            .map(|(_, &front)| front)
    }

    /// Adds a member unless one with `y` and front both no better already
    /// covers it; evicts the members it covers.
    fn insert(&mut self, y: &T, front: usize) {
        if self.max_front_at_or_below(y).is_some_and(|f| f >= front) {
            return;
        }

        let key = Coordinate(y.clone());
        let covered: Vec<Coordinate<T>> = self
            .steps
            .range(key.clone()..)
            .take_while(|&(_, &f)| f <= front)
            .map(|(k, _)| k.clone())
            .collect();
        for k in &covered {
            self.steps.remove(k);
        }
        self.steps.insert(key, front);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.steps.len()
    }
}

/// Ranks `indices` among themselves on the first two coordinates.
pub(crate) fn sweep_within<T: PartialOrd + Clone>(records: &mut [Record<T>], indices: &[usize]) {
    let mut staircase = Staircase::new();

    for &index in indices {
        if let Some(front) = staircase.max_front_at_or_below(&records[index].objectives[1]) {
            records[index].raise_front(front + 1);
        }
        let record = &records[index];
        staircase.insert(&record.objectives[1], record.front);
    }
}

/// Raises the fronts of `assign` for domination by the ranked `comp`, on
/// the first two coordinates.
///
/// A `comp` record whose first two coordinates equal those of an `assign`
/// record counts as dominating it.
pub(crate) fn sweep_across<T: PartialOrd + Clone>(records: &mut [Record<T>], comp: &[usize], assign: &[usize]) {
    let mut staircase = Staircase::new();
    let mut pending = comp.iter().copied().peekable();

    for &index in assign {
        while let Some(c) = pending.next_if(|&c| precedes(&records[c].objectives, &records[index].objectives)) {
            staircase.insert(&records[c].objectives[1], records[c].front);
        }

        if let Some(front) = staircase.max_front_at_or_below(&records[index].objectives[1]) {
            records[index].raise_front(front + 1);
        }
    }
}

/// `(a0, a1) <= (b0, b1)` lexicographically.
fn precedes<T: PartialOrd>(a: &[T], b: &[T]) -> bool {
    a[0] < b[0] || (a[0] == b[0] && a[1] <= b[1])
}
