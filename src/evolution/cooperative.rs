//! A cooperative coevolutionary solver: two independently-typed population solvers are
//! coupled into a single solver over a joint problem. Each outer iteration both sides
//! exchange representative individuals, every candidate of one side is paired with every
//! representative of the other, the joint problem scores the composite solutions and an
//! aggregated quality is reported back as the candidate's own. The sub-problems are thus
//! non-stationary closures over a moving partner population.

#[cfg(test)]
#[path = "../../tests/unit/evolution/cooperative_test.rs"]
mod cooperative_test;

use super::aggregation::QualityAggregator;
use super::selection::Selector;
use super::*;
use crate::population::{PartialOrdering, PartiallyOrderedCollection};
use crate::utils::{Environment, SolverResult, Timer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A function which combines two sub-solutions into a composite solution.
pub type SolutionAggregator<S1, S2, S> = Arc<dyn Fn(&S1, &S2) -> S + Send + Sync>;

/// A state of the cooperative solver: the outer state over composite individuals
/// (evaluation artifacts with a unit genotype) plus the two inner solver states.
pub struct CooperativeState<G1, S1, G2, S2, S, Q> {
    base: SearchState<(), S, Q>,
    state1: SearchState<G1, S1, Q>,
    state2: SearchState<G2, S2, Q>,
}

impl<G1, S1, G2, S2, S, Q> CooperativeState<G1, S1, G2, S2, S, Q> {
    /// Returns the outer population of composite individuals.
    pub fn population(&self) -> &PartiallyOrderedCollection<Arc<Individual<(), S, Q>>> {
        self.base.population()
    }

    /// Returns the first inner solver state.
    pub fn state1(&self) -> &SearchState<G1, S1, Q> {
        &self.state1
    }

    /// Returns the second inner solver state.
    pub fn state2(&self) -> &SearchState<G2, S2, Q> {
        &self.state2
    }
}

impl<G1, S1, G2, S2, S, Q> Clone for CooperativeState<G1, S1, G2, S2, S, Q> {
    fn clone(&self) -> Self {
        Self { base: self.base.clone(), state1: self.state1.clone(), state2: self.state2.clone() }
    }
}

impl<G1, S1, G2, S2, S, Q> SolverState for CooperativeState<G1, S1, G2, S2, S, Q> {
    fn n_of_iterations(&self) -> usize {
        self.base.n_of_iterations()
    }

    fn n_of_births(&self) -> usize {
        self.base.n_of_births()
    }

    fn n_of_quality_evaluations(&self) -> usize {
        self.base.n_of_quality_evaluations()
    }

    fn elapsed_millis(&self) -> u128 {
        self.base.elapsed_millis()
    }
}

// Collects composite individuals produced inside the sub-problem closures. Quality
// functions may run on multiple worker threads at once, hence the guarded vector and
// the atomic birth counter: a plain read-modify-write would hand out duplicate ids.
struct Accumulator<S, Q> {
    composites: Mutex<Vec<Arc<Individual<(), S, Q>>>>,
    births: AtomicUsize,
}

impl<S, Q> Accumulator<S, Q> {
    fn new(first_birth_id: usize) -> Self {
        Self { composites: Mutex::new(Vec::default()), births: AtomicUsize::new(first_birth_id) }
    }

    fn push(&self, solution: S, quality: Q) {
        let birth_id = self.births.fetch_add(1, Ordering::SeqCst);
        let individual = Arc::new(Individual::new((), solution, quality, birth_id, Vec::default()));

        self.composites.lock().expect("accumulator lock is not poisoned").push(individual);
    }

    fn take(&self) -> Vec<Arc<Individual<(), S, Q>>> {
        std::mem::take(&mut *self.composites.lock().expect("accumulator lock is not poisoned"))
    }

    fn count(&self) -> usize {
        self.births.load(Ordering::SeqCst)
    }
}

/// Composes two population solvers into a single solver over a joint problem whose
/// solutions are pairs of sub-solutions combined by a solution aggregator.
pub struct CooperativeSolver<G1, S1, G2, S2, S, Q> {
    solver1: PopulationSolver<G1, S1, Q>,
    solver2: PopulationSolver<G2, S2, Q>,
    selector1: Arc<dyn Selector<Arc<Individual<G1, S1, Q>>>>,
    selector2: Arc<dyn Selector<Arc<Individual<G2, S2, Q>>>>,
    solution_aggregator: SolutionAggregator<S1, S2, S>,
    quality_aggregator: Arc<dyn QualityAggregator<Q>>,
}

impl<G1, S1, G2, S2, S, Q> CooperativeSolver<G1, S1, G2, S2, S, Q>
where
    G1: Clone + Send + Sync + 'static,
    S1: Clone + Send + Sync + 'static,
    G2: Clone + Send + Sync + 'static,
    S2: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    Q: Clone + Default + Send + Sync + 'static,
{
    /// Creates a new instance of `CooperativeSolver`.
    pub fn new(
        solver1: PopulationSolver<G1, S1, Q>,
        solver2: PopulationSolver<G2, S2, Q>,
        selector1: Arc<dyn Selector<Arc<Individual<G1, S1, Q>>>>,
        selector2: Arc<dyn Selector<Arc<Individual<G2, S2, Q>>>>,
        solution_aggregator: SolutionAggregator<S1, S2, S>,
        quality_aggregator: Arc<dyn QualityAggregator<Q>>,
    ) -> Self {
        Self { solver1, solver2, selector1, selector2, solution_aggregator, quality_aggregator }
    }

    // A shape-only problem used to bootstrap a sub-population before any representatives
    // exist: neutral quality, every pair of qualities is equivalent.
    fn dummy_problem<SS>() -> Arc<dyn Problem<Solution = SS, Quality = Q>>
    where
        SS: Send + Sync + 'static,
    {
        Arc::new(SharedProblem::new(
            Arc::new(|_: &SS| Ok(Q::default())),
            Arc::new(|_: &Q, _: &Q| PartialOrdering::Same),
        ))
    }

    /// Builds the sub-problem of side 1: a candidate is paired with every collaborator
    /// of side 2, the joint problem scores each composite, every composite is accumulated
    /// and the aggregated quality becomes the candidate's own.
    fn derive_problem1(
        &self,
        joint: &Arc<dyn Problem<Solution = S, Quality = Q>>,
        collaborators: Vec<Arc<Individual<G2, S2, Q>>>,
        accumulator: &Arc<Accumulator<S, Q>>,
    ) -> Arc<dyn Problem<Solution = S1, Quality = Q>> {
        let comparator = joint.comparator();
        let joint = joint.clone();
        let accumulator = accumulator.clone();
        let solution_aggregator = self.solution_aggregator.clone();
        let quality_aggregator = self.quality_aggregator.clone();

        let quality_fn = Arc::new(move |candidate: &S1| {
            let qualities = collaborators
                .iter()
                .map(|collaborator| {
                    let composite = (solution_aggregator)(candidate, collaborator.solution());
                    let quality = joint.evaluate(&composite)?;
                    accumulator.push(composite, quality.clone());

                    Ok(quality)
                })
                .collect::<SolverResult<Vec<_>>>()?;

            quality_aggregator.apply(qualities)
        });

        Arc::new(SharedProblem::new(quality_fn, comparator))
    }

    /// Symmetric construction for side 2 using side-1 collaborators.
    fn derive_problem2(
        &self,
        joint: &Arc<dyn Problem<Solution = S, Quality = Q>>,
        collaborators: Vec<Arc<Individual<G1, S1, Q>>>,
        accumulator: &Arc<Accumulator<S, Q>>,
    ) -> Arc<dyn Problem<Solution = S2, Quality = Q>> {
        let comparator = joint.comparator();
        let joint = joint.clone();
        let accumulator = accumulator.clone();
        let solution_aggregator = self.solution_aggregator.clone();
        let quality_aggregator = self.quality_aggregator.clone();

        let quality_fn = Arc::new(move |candidate: &S2| {
            let qualities = collaborators
                .iter()
                .map(|collaborator| {
                    let composite = (solution_aggregator)(collaborator.solution(), candidate);
                    let quality = joint.evaluate(&composite)?;
                    accumulator.push(composite, quality.clone());

                    Ok(quality)
                })
                .collect::<SolverResult<Vec<_>>>()?;

            quality_aggregator.apply(qualities)
        });

        Arc::new(SharedProblem::new(quality_fn, comparator))
    }

    fn assemble_outer_population(
        joint: &Arc<dyn Problem<Solution = S, Quality = Q>>,
        composites: Vec<Arc<Individual<(), S, Q>>>,
    ) -> PartiallyOrderedCollection<Arc<Individual<(), S, Q>>> {
        PartiallyOrderedCollection::from(composites, individual_comparator(joint.comparator()))
    }
}

impl<G1, S1, G2, S2, S, Q> IterativeSolver for CooperativeSolver<G1, S1, G2, S2, S, Q>
where
    G1: Clone + Send + Sync + 'static,
    S1: Clone + Send + Sync + 'static,
    G2: Clone + Send + Sync + 'static,
    S2: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    Q: Clone + Default + Send + Sync + 'static,
{
    type Solution = S;
    type Quality = Q;
    type State = CooperativeState<G1, S1, G2, S2, S, Q>;

    fn init(
        &self,
        problem: Arc<dyn Problem<Solution = S, Quality = Q>>,
        environment: &Environment,
    ) -> SolverResult<Self::State> {
        // bootstrap both sides to obtain an initial sub-population shape
        let shape1 = self.solver1.init(Self::dummy_problem(), environment)?;
        let shape2 = self.solver2.init(Self::dummy_problem(), environment)?;

        // one snapshot of both sides, drawn before either real initialization runs
        let random = environment.random.as_ref();
        let representatives1 = self.selector1.select(shape1.population(), random);
        let representatives2 = self.selector2.select(shape2.population(), random);

        let accumulator = Arc::new(Accumulator::new(0));
        let problem1 = self.derive_problem1(&problem, representatives2, &accumulator);
        let problem2 = self.derive_problem2(&problem, representatives1, &accumulator);

        // the real initialization is where quality evaluations are charged
        let state1 = self.solver1.init(problem1, environment)?;
        let state2 = self.solver2.init(problem2, environment)?;

        let population = Self::assemble_outer_population(&problem, accumulator.take());
        let base = SearchState::from_parts(
            Timer::start(),
            0,
            state1.n_of_births() + state2.n_of_births(),
            accumulator.count(),
            population,
        );

        Ok(CooperativeState { base, state1, state2 })
    }

    fn update(
        &self,
        problem: Arc<dyn Problem<Solution = S, Quality = Q>>,
        environment: &Environment,
        state: Self::State,
    ) -> SolverResult<Self::State> {
        let CooperativeState { base, state1, state2 } = state;

        // both sides evolve against the same pre-update snapshot of the partner
        let random = environment.random.as_ref();
        let representatives1 = self.selector1.select(state1.population(), random);
        let representatives2 = self.selector2.select(state2.population(), random);

        let accumulator = Arc::new(Accumulator::new(base.n_of_quality_evaluations()));
        let problem1 = self.derive_problem1(&problem, representatives2, &accumulator);
        let problem2 = self.derive_problem2(&problem, representatives1, &accumulator);

        // side 1 fully completes, including its internal barriers, before side 2 starts
        let state1 = self.solver1.update(problem1, environment, state1)?;
        let state2 = self.solver2.update(problem2, environment, state2)?;

        let population = Self::assemble_outer_population(&problem, accumulator.take());
        let base = SearchState::from_parts(
            base.started().clone(),
            base.n_of_iterations() + 1,
            state1.n_of_births() + state2.n_of_births(),
            accumulator.count(),
            population,
        );

        Ok(CooperativeState { base, state1, state2 })
    }

    fn solutions(&self, state: &Self::State) -> Vec<Self::Solution> {
        state.population().firsts().map(|individual| individual.solution().clone()).collect()
    }
}
