//! Aggregation strategies which reduce a collection of quality values, produced by
//! pairing one individual with multiple collaborators, into a single quality value.

#[cfg(test)]
#[path = "../../tests/unit/evolution/aggregation_test.rs"]
mod aggregation_test;

use crate::utils::{SolverError, SolverResult};
use std::cmp::Ordering;
use std::sync::Arc;

/// A total order function over quality values.
pub type QualityOrderFn<Q> = Arc<dyn Fn(&Q, &Q) -> Ordering + Send + Sync>;

/// A pure strategy which reduces a non-empty collection of quality values into one.
/// Reducing an empty collection is an error: there is no meaningful default quality.
pub trait QualityAggregator<Q>: Send + Sync {
    /// Reduces given quality values into a single one.
    fn apply(&self, qualities: Vec<Q>) -> SolverResult<Q>;
}

fn empty_input_error() -> SolverError {
    SolverError::from("cannot aggregate an empty quality collection")
}

/// Picks the first (minimal) quality under given total order.
pub struct FirstQuality<Q> {
    order: QualityOrderFn<Q>,
}

impl<Q> FirstQuality<Q> {
    /// Creates a new instance of `FirstQuality`.
    pub fn new(order: QualityOrderFn<Q>) -> Self {
        Self { order }
    }
}

impl<Q: Send + Sync> QualityAggregator<Q> for FirstQuality<Q> {
    fn apply(&self, qualities: Vec<Q>) -> SolverResult<Q> {
        qualities.into_iter().min_by(|a, b| (self.order)(a, b)).ok_or_else(empty_input_error)
    }
}

/// Picks the last (maximal) quality under given total order.
pub struct LastQuality<Q> {
    order: QualityOrderFn<Q>,
}

impl<Q> LastQuality<Q> {
    /// Creates a new instance of `LastQuality`.
    pub fn new(order: QualityOrderFn<Q>) -> Self {
        Self { order }
    }
}

impl<Q: Send + Sync> QualityAggregator<Q> for LastQuality<Q> {
    fn apply(&self, qualities: Vec<Q>) -> SolverResult<Q> {
        qualities.into_iter().max_by(|a, b| (self.order)(a, b)).ok_or_else(empty_input_error)
    }
}

/// Picks the median quality under given total order, the lower one for an even amount.
pub struct MedianQuality<Q> {
    order: QualityOrderFn<Q>,
}

impl<Q> MedianQuality<Q> {
    /// Creates a new instance of `MedianQuality`.
    pub fn new(order: QualityOrderFn<Q>) -> Self {
        Self { order }
    }
}

impl<Q: Send + Sync> QualityAggregator<Q> for MedianQuality<Q> {
    fn apply(&self, qualities: Vec<Q>) -> SolverResult<Q> {
        if qualities.is_empty() {
            return Err(empty_input_error());
        }

        let mut qualities = qualities;
        qualities.sort_by(|a, b| (self.order)(a, b));
        let idx = (qualities.len() - 1) / 2;

        Ok(qualities.swap_remove(idx))
    }
}
