//! This module contains the iterative solver core: immutable individuals and states, the
//! solver contract with its driving loop, a concrete population-based solver and the
//! cooperative coevolutionary solver which couples two of them over a joint problem.

use crate::population::PartialComparator;
use crate::termination::Termination;
use crate::utils::{Environment, Random, SolverResult};
use std::sync::Arc;

mod individual;
pub use self::individual::*;

mod state;
pub use self::state::*;

mod solver;
pub use self::solver::*;

mod cooperative;
pub use self::cooperative::*;

pub mod aggregation;
pub mod selection;

/// Defines an optimization problem at its interface: a quality function over solutions
/// and a comparator used to rank quality values.
pub trait Problem: Send + Sync {
    /// A solution type.
    type Solution;
    /// A quality type.
    type Quality;

    /// Computes the quality of given solution. A failure aborts the whole solve.
    fn evaluate(&self, solution: &Self::Solution) -> SolverResult<Self::Quality>;

    /// Returns the comparator which ranks quality values.
    fn comparator(&self) -> Arc<dyn PartialComparator<Self::Quality>>;
}

/// A closure-backed problem implementation. Cooperative sub-problems are instances of
/// this type rebuilt every outer iteration around the partner population's snapshot.
pub struct SharedProblem<S, Q> {
    quality_fn: Arc<dyn Fn(&S) -> SolverResult<Q> + Send + Sync>,
    comparator: Arc<dyn PartialComparator<Q>>,
}

impl<S, Q> SharedProblem<S, Q> {
    /// Creates a new instance of `SharedProblem`.
    pub fn new(
        quality_fn: Arc<dyn Fn(&S) -> SolverResult<Q> + Send + Sync>,
        comparator: Arc<dyn PartialComparator<Q>>,
    ) -> Self {
        Self { quality_fn, comparator }
    }
}

impl<S, Q> Problem for SharedProblem<S, Q> {
    type Solution = S;
    type Quality = Q;

    fn evaluate(&self, solution: &Self::Solution) -> SolverResult<Self::Quality> {
        (self.quality_fn)(solution)
    }

    fn comparator(&self) -> Arc<dyn PartialComparator<Self::Quality>> {
        self.comparator.clone()
    }
}

/// Samples new genotypes for an initial population.
pub trait GenotypeFactory<G>: Send + Sync {
    /// Builds `n` genotypes.
    fn build(&self, n: usize, random: &dyn Random) -> Vec<G>;
}

impl<G, F> GenotypeFactory<G> for F
where
    F: Fn(usize, &dyn Random) -> Vec<G> + Send + Sync,
{
    fn build(&self, n: usize, random: &dyn Random) -> Vec<G> {
        (self)(n, random)
    }
}

/// Derives a solution from a genotype. Mapping can be partial: a failure propagates as
/// a solver failure.
pub trait SolutionMapper<G, S>: Send + Sync {
    /// Maps a genotype to a solution.
    fn map(&self, genotype: &G) -> SolverResult<S>;
}

impl<G, S, F> SolutionMapper<G, S> for F
where
    F: Fn(&G) -> SolverResult<S> + Send + Sync,
{
    fn map(&self, genotype: &G) -> SolverResult<S> {
        (self)(genotype)
    }
}

/// A variation operator (mutation, crossover) over genotypes.
pub trait Variation<G>: Send + Sync {
    /// Returns amount of parents the operator needs.
    fn arity(&self) -> usize;

    /// Builds an offspring genotype from given parents.
    fn apply(&self, parents: &[&G], random: &dyn Random) -> G;
}

/// The generic solver contract: a state machine driven by `init` and `update`, with a
/// stop predicate re-evaluated on the current state before each update (so it can fire
/// at iteration zero, performing no updates at all).
pub trait IterativeSolver {
    /// A solution type of the solved problem.
    type Solution;
    /// A quality type of the solved problem.
    type Quality;
    /// A state type produced by the solver.
    type State: SolverState;

    /// Builds the initial state for given problem.
    fn init(
        &self,
        problem: Arc<dyn Problem<Solution = Self::Solution, Quality = Self::Quality>>,
        environment: &Environment,
    ) -> SolverResult<Self::State>;

    /// Advances the solve by one iteration, consuming the previous state.
    fn update(
        &self,
        problem: Arc<dyn Problem<Solution = Self::Solution, Quality = Self::Quality>>,
        environment: &Environment,
        state: Self::State,
    ) -> SolverResult<Self::State>;

    /// Extracts the current best solutions from given state.
    fn solutions(&self, state: &Self::State) -> Vec<Self::Solution>;

    /// Runs the solve loop until the termination criteria fires, handing every state
    /// snapshot to the listener. Returns a non-empty solution collection or fails.
    fn solve(
        &self,
        problem: Arc<dyn Problem<Solution = Self::Solution, Quality = Self::Quality>>,
        environment: &Environment,
        termination: &dyn Termination<Self::State>,
        listener: &mut dyn FnMut(&Self::State),
    ) -> SolverResult<Vec<Self::Solution>> {
        let mut state = self.init(problem.clone(), environment)?;
        (environment.logger)(&format!(
            "created initial state with {} birth(-s) in {}ms",
            state.n_of_births(),
            state.elapsed_millis()
        ));
        listener(&state);

        while !termination.is_termination(&state) {
            state = self.update(problem.clone(), environment, state)?;
            listener(&state);
        }

        (environment.logger)(&format!(
            "stopped after {} iteration(-s) and {} quality evaluation(-s) in {}ms",
            state.n_of_iterations(),
            state.n_of_quality_evaluations(),
            state.elapsed_millis()
        ));

        let solutions = self.solutions(&state);
        if solutions.is_empty() {
            return Err("solver stopped with no solutions".into());
        }

        Ok(solutions)
    }
}
