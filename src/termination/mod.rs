//! Contains stop criteria for the iterative solvers. A criterion is a predicate over a
//! solver state, re-evaluated before each update, so a zero-budget criterion stops the
//! solve right after initialization.

#[cfg(test)]
#[path = "../../tests/unit/termination/composite_test.rs"]
mod composite_test;

use crate::utils::Float;

mod max_iteration;
pub use self::max_iteration::MaxIteration;

mod max_millis;
pub use self::max_millis::MaxMillis;

mod target_quality;
pub use self::target_quality::TargetQuality;

/// A trait which specifies criteria when the solve should stop.
pub trait Termination<St> {
    /// Returns true when the solve should be stopped.
    fn is_termination(&self, state: &St) -> bool;

    /// Returns a relative estimation of solve completeness in `[0., 1.]` range.
    fn estimate(&self, state: &St) -> Float;
}

/// A trivial termination which stops after the first check, useful to probe the initial
/// state without running any update.
pub struct StopImmediately;

impl<St> Termination<St> for StopImmediately {
    fn is_termination(&self, _: &St) -> bool {
        true
    }

    fn estimate(&self, _: &St) -> Float {
        1.
    }
}

/// A composite termination which stops when any of inner criteria is met.
pub struct CompositeAny<St> {
    criteria: Vec<Box<dyn Termination<St>>>,
}

impl<St> CompositeAny<St> {
    /// Creates a new instance of `CompositeAny`.
    pub fn new(criteria: Vec<Box<dyn Termination<St>>>) -> Self {
        assert!(!criteria.is_empty());
        Self { criteria }
    }
}

impl<St> Termination<St> for CompositeAny<St> {
    fn is_termination(&self, state: &St) -> bool {
        self.criteria.iter().any(|criterion| criterion.is_termination(state))
    }

    fn estimate(&self, state: &St) -> Float {
        self.criteria.iter().map(|criterion| criterion.estimate(state)).fold(0., Float::max)
    }
}

/// A composite termination which stops only when all inner criteria are met.
pub struct CompositeAll<St> {
    criteria: Vec<Box<dyn Termination<St>>>,
}

impl<St> CompositeAll<St> {
    /// Creates a new instance of `CompositeAll`.
    pub fn new(criteria: Vec<Box<dyn Termination<St>>>) -> Self {
        assert!(!criteria.is_empty());
        Self { criteria }
    }
}

impl<St> Termination<St> for CompositeAll<St> {
    fn is_termination(&self, state: &St) -> bool {
        self.criteria.iter().all(|criterion| criterion.is_termination(state))
    }

    fn estimate(&self, state: &St) -> Float {
        let total: Float = self.criteria.iter().map(|criterion| criterion.estimate(state)).sum();
        total / self.criteria.len() as Float
    }
}
