#[cfg(test)]
#[path = "../../tests/unit/termination/max_millis_test.rs"]
mod max_millis_test;

use super::Termination;
use crate::evolution::SolverState;
use crate::utils::Float;

/// A termination criteria which is in terminated state after a specific amount of
/// milliseconds has elapsed since the state was created.
pub struct MaxMillis {
    limit: u128,
}

impl MaxMillis {
    /// Creates a new instance of `MaxMillis`.
    pub fn new(limit: u128) -> Self {
        Self { limit }
    }
}

impl<St: SolverState> Termination<St> for MaxMillis {
    fn is_termination(&self, state: &St) -> bool {
        state.elapsed_millis() >= self.limit
    }

    fn estimate(&self, state: &St) -> Float {
        if self.limit == 0 {
            1.
        } else {
            (state.elapsed_millis() as Float / self.limit as Float).min(1.)
        }
    }
}
