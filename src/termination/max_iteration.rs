#[cfg(test)]
#[path = "../../tests/unit/termination/max_iteration_test.rs"]
mod max_iteration_test;

use super::Termination;
use crate::evolution::SolverState;
use crate::utils::Float;

/// A termination criteria which is in terminated state after a specific amount of
/// iterations. A zero limit stops the solve right after initialization.
pub struct MaxIteration {
    limit: usize,
}

impl MaxIteration {
    /// Creates a new instance of `MaxIteration`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl<St: SolverState> Termination<St> for MaxIteration {
    fn is_termination(&self, state: &St) -> bool {
        state.n_of_iterations() >= self.limit
    }

    fn estimate(&self, state: &St) -> Float {
        if self.limit == 0 {
            1.
        } else {
            (state.n_of_iterations() as Float / self.limit as Float).min(1.)
        }
    }
}
