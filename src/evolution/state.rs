#[cfg(test)]
#[path = "../../tests/unit/evolution/state_test.rs"]
mod state_test;

use super::Individual;
use crate::population::PartiallyOrderedCollection;
use crate::utils::Timer;
use std::sync::Arc;

/// Exposes solve progress counters of a solver state. States are immutable snapshots:
/// an update produces a new state value, listeners never observe in-place mutation.
pub trait SolverState {
    /// Returns amount of finished iterations.
    fn n_of_iterations(&self) -> usize;

    /// Returns amount of individuals born since the solve started.
    fn n_of_births(&self) -> usize;

    /// Returns amount of quality evaluations performed since the solve started.
    fn n_of_quality_evaluations(&self) -> usize;

    /// Returns elapsed time, in milliseconds, since the solve started.
    fn elapsed_millis(&self) -> u128;
}

/// A state of a population-based solver: progress counters plus the current population
/// of shared individuals.
pub struct SearchState<G, S, Q> {
    started: Timer,
    n_of_iterations: usize,
    n_of_births: usize,
    n_of_quality_evaluations: usize,
    population: PartiallyOrderedCollection<Arc<Individual<G, S, Q>>>,
}

impl<G, S, Q> Clone for SearchState<G, S, Q> {
    fn clone(&self) -> Self {
        Self {
            started: self.started.clone(),
            n_of_iterations: self.n_of_iterations,
            n_of_births: self.n_of_births,
            n_of_quality_evaluations: self.n_of_quality_evaluations,
            population: self.population.clone(),
        }
    }
}

impl<G, S, Q> SearchState<G, S, Q> {
    /// Creates an initial state charging given amount of births and evaluations.
    pub fn new(
        population: PartiallyOrderedCollection<Arc<Individual<G, S, Q>>>,
        n_of_births: usize,
        n_of_quality_evaluations: usize,
    ) -> Self {
        Self { started: Timer::start(), n_of_iterations: 0, n_of_births, n_of_quality_evaluations, population }
    }

    pub(crate) fn from_parts(
        started: Timer,
        n_of_iterations: usize,
        n_of_births: usize,
        n_of_quality_evaluations: usize,
        population: PartiallyOrderedCollection<Arc<Individual<G, S, Q>>>,
    ) -> Self {
        Self { started, n_of_iterations, n_of_births, n_of_quality_evaluations, population }
    }

    /// Returns a new state value with the iteration counter incremented, given amounts
    /// added to the birth/evaluation counters and the population replaced wholesale.
    pub fn updated_with_iteration(
        &self,
        births: usize,
        quality_evaluations: usize,
        population: PartiallyOrderedCollection<Arc<Individual<G, S, Q>>>,
    ) -> Self {
        Self {
            started: self.started.clone(),
            n_of_iterations: self.n_of_iterations + 1,
            n_of_births: self.n_of_births + births,
            n_of_quality_evaluations: self.n_of_quality_evaluations + quality_evaluations,
            population,
        }
    }

    /// Returns the current population.
    pub fn population(&self) -> &PartiallyOrderedCollection<Arc<Individual<G, S, Q>>> {
        &self.population
    }

    pub(crate) fn started(&self) -> &Timer {
        &self.started
    }
}

impl<G, S, Q> SolverState for SearchState<G, S, Q> {
    fn n_of_iterations(&self) -> usize {
        self.n_of_iterations
    }

    fn n_of_births(&self) -> usize {
        self.n_of_births
    }

    fn n_of_quality_evaluations(&self) -> usize {
        self.n_of_quality_evaluations
    }

    fn elapsed_millis(&self) -> u128 {
        self.started.elapsed_millis()
    }
}
