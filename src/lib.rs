//! Non-dominated sorting for Pareto-based multi-objective optimization.
//!
//! Provides a divide-and-conquer implementation of non-dominated sorting
//! (the "generalized Jensen" algorithm in its provably fast form), the
//! ranking step run once per generation by NSGA-II style optimizers:
//!
//! - **Front assignment**: every objective vector receives a front index;
//!   front 0 is the Pareto front, front k+1 holds vectors dominated only
//!   by vectors in fronts ≤ k.
//! - **Decision-agnostic**: decisions are opaque values projected onto
//!   objective vectors by a caller-supplied closure.
//! - **Reference sort**: the classic O(M·N²) fast non-dominated sort, kept
//!   as a baseline and test oracle.
//!
//! # Architecture
//!
//! This crate is a pure, single-threaded computation with no global
//! state. It does not evolve, mutate, or generate solutions; it only
//! ranks a static snapshot handed to it by an optimizer loop.

pub mod nds;
