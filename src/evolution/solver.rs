#[cfg(test)]
#[path = "../../tests/unit/evolution/solver_test.rs"]
mod solver_test;

use super::selection::{Selector, Tournament};
use super::*;
use crate::population::PartiallyOrderedCollection;
use crate::utils::{parallel_into_collect, Environment, Random, SolverResult};
use std::sync::{Arc, Weak};

/// A generational population-based solver: each iteration selects parents, applies
/// weighted variation operators, maps and evaluates the offspring in parallel (with a
/// barrier at the end of the generation), merges them with survivors and truncates the
/// merged pool back to the population size by peeling non-dominated fronts.
pub struct PopulationSolver<G, S, Q> {
    population_size: usize,
    offspring_size: usize,
    remap: bool,
    factory: Arc<dyn GenotypeFactory<G>>,
    mapper: Arc<dyn SolutionMapper<G, S>>,
    selector: Arc<dyn Selector<Arc<Individual<G, S, Q>>>>,
    variations: Vec<(Arc<dyn Variation<G>>, usize)>,
}

/// Provides a configurable way to build a `PopulationSolver`, validating the
/// configuration eagerly: misconfiguration fails at construction time, not mid-solve.
pub struct PopulationSolverBuilder<G, S, Q> {
    population_size: usize,
    offspring_size: Option<usize>,
    remap: bool,
    factory: Option<Arc<dyn GenotypeFactory<G>>>,
    mapper: Option<Arc<dyn SolutionMapper<G, S>>>,
    selector: Arc<dyn Selector<Arc<Individual<G, S, Q>>>>,
    variations: Vec<(Arc<dyn Variation<G>>, usize)>,
}

impl<G, S, Q> Default for PopulationSolverBuilder<G, S, Q>
where
    G: Send + Sync + 'static,
    S: Send + Sync + 'static,
    Q: Send + Sync + 'static,
{
    fn default() -> Self {
        Self {
            population_size: 0,
            offspring_size: None,
            remap: false,
            factory: None,
            mapper: None,
            selector: Arc::new(Tournament::new(2)),
            variations: Vec::default(),
        }
    }
}

impl<G, S, Q> PopulationSolverBuilder<G, S, Q>
where
    G: Send + Sync + 'static,
    S: Send + Sync + 'static,
    Q: Send + Sync + 'static,
{
    /// Sets population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets amount of offspring born each iteration. Defaults to the population size.
    pub fn with_offspring_size(mut self, offspring_size: usize) -> Self {
        self.offspring_size = Some(offspring_size);
        self
    }

    /// Enables re-evaluation of survivors against the current problem on each iteration.
    /// Required when the problem is non-stationary, e.g. a cooperative sub-problem.
    pub fn with_remap(mut self, remap: bool) -> Self {
        self.remap = remap;
        self
    }

    /// Sets genotype factory.
    pub fn with_factory(mut self, factory: Arc<dyn GenotypeFactory<G>>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Sets genotype to solution mapper.
    pub fn with_mapper(mut self, mapper: Arc<dyn SolutionMapper<G, S>>) -> Self {
        self.mapper = Some(mapper);
        self
    }

    /// Sets parent selector. Defaults to a binary tournament.
    pub fn with_selector(mut self, selector: Arc<dyn Selector<Arc<Individual<G, S, Q>>>>) -> Self {
        self.selector = selector;
        self
    }

    /// Adds a variation operator with given selection weight.
    pub fn with_variation(mut self, variation: Arc<dyn Variation<G>>, weight: usize) -> Self {
        self.variations.push((variation, weight));
        self
    }

    /// Builds a `PopulationSolver` failing fast on an invalid configuration.
    pub fn build(self) -> SolverResult<PopulationSolver<G, S, Q>> {
        if self.population_size == 0 {
            return Err("population size must be greater than zero".into());
        }

        let factory = self.factory.ok_or("genotype factory must be set")?;
        let mapper = self.mapper.ok_or("solution mapper must be set")?;

        if self.variations.is_empty() {
            return Err("at least one variation operator must be set".into());
        }

        if self.variations.iter().any(|(variation, weight)| variation.arity() == 0 || *weight == 0) {
            return Err("variation operators must have non-zero arity and weight".into());
        }

        Ok(PopulationSolver {
            population_size: self.population_size,
            offspring_size: self.offspring_size.unwrap_or(self.population_size),
            remap: self.remap,
            factory,
            mapper,
            selector: self.selector,
            variations: self.variations,
        })
    }
}

impl<G, S, Q> PopulationSolver<G, S, Q>
where
    G: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    Q: Clone + Send + Sync + 'static,
{
    /// Returns a builder for `PopulationSolver`.
    pub fn builder() -> PopulationSolverBuilder<G, S, Q> {
        PopulationSolverBuilder::default()
    }

    /// Maps and evaluates given genotypes concurrently across the worker pool, waiting
    /// for all tasks to complete. Any failure surfaces through the barrier and the
    /// partially evaluated generation is discarded.
    fn evaluate_all(
        &self,
        genotypes: Vec<(G, Vec<Weak<Individual<G, S, Q>>>)>,
        birth_iteration: usize,
        problem: &Arc<dyn Problem<Solution = S, Quality = Q>>,
        environment: &Environment,
    ) -> SolverResult<Vec<Arc<Individual<G, S, Q>>>> {
        let mapper = self.mapper.clone();
        let problem = problem.clone();

        let evaluated = environment.parallelism.execute(move || {
            parallel_into_collect(genotypes, |(genotype, parents)| {
                let solution = mapper.map(&genotype)?;
                let quality = problem.evaluate(&solution)?;

                Ok(Arc::new(Individual::new(genotype, solution, quality, birth_iteration, parents)))
            })
        });

        evaluated.into_iter().collect()
    }

    /// Re-evaluates given survivors against the current problem.
    fn remap_all(
        &self,
        survivors: Vec<Arc<Individual<G, S, Q>>>,
        problem: &Arc<dyn Problem<Solution = S, Quality = Q>>,
        environment: &Environment,
    ) -> SolverResult<Vec<Arc<Individual<G, S, Q>>>> {
        let problem = problem.clone();

        let remapped = environment.parallelism.execute(move || {
            parallel_into_collect(survivors, |individual| {
                let quality = problem.evaluate(individual.solution())?;

                Ok(Arc::new(individual.with_quality(quality)))
            })
        });

        remapped.into_iter().collect()
    }

    /// Keeps at most `n` individuals by peeling non-dominated fronts; a front which does
    /// not fit as a whole is thinned by dropping random individuals.
    fn truncate(
        mut pool: PartiallyOrderedCollection<Arc<Individual<G, S, Q>>>,
        n: usize,
        random: &dyn Random,
    ) -> Vec<Arc<Individual<G, S, Q>>> {
        let mut kept = Vec::with_capacity(n);

        while kept.len() < n && !pool.is_empty() {
            let mut front = pool.drain_firsts();
            let remaining = n - kept.len();

            while front.len() > remaining {
                let idx = random.uniform_int(0, front.len() as i32 - 1) as usize;
                front.swap_remove(idx);
            }

            kept.extend(front);
        }

        kept
    }
}

impl<G, S, Q> IterativeSolver for PopulationSolver<G, S, Q>
where
    G: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    Q: Clone + Send + Sync + 'static,
{
    type Solution = S;
    type Quality = Q;
    type State = SearchState<G, S, Q>;

    fn init(
        &self,
        problem: Arc<dyn Problem<Solution = S, Quality = Q>>,
        environment: &Environment,
    ) -> SolverResult<Self::State> {
        let genotypes = self
            .factory
            .build(self.population_size, environment.random.as_ref())
            .into_iter()
            .map(|genotype| (genotype, Vec::default()))
            .collect::<Vec<_>>();

        if genotypes.is_empty() {
            return Err("genotype factory produced no genotypes".into());
        }

        let individuals = self.evaluate_all(genotypes, 0, &problem, environment)?;
        let n_of_births = individuals.len();

        let population = PartiallyOrderedCollection::from(individuals, individual_comparator(problem.comparator()));

        Ok(SearchState::new(population, n_of_births, n_of_births))
    }

    fn update(
        &self,
        problem: Arc<dyn Problem<Solution = S, Quality = Q>>,
        environment: &Environment,
        state: Self::State,
    ) -> SolverResult<Self::State> {
        let random = environment.random.as_ref();
        let weights = self.variations.iter().map(|(_, weight)| *weight).collect::<Vec<_>>();

        let mut offspring = Vec::with_capacity(self.offspring_size);
        for _ in 0..self.offspring_size {
            let (variation, _) = &self.variations[random.weighted(weights.as_slice())];

            let mut parents = Vec::with_capacity(variation.arity());
            for _ in 0..variation.arity() {
                let parent = self
                    .selector
                    .select(state.population(), random)
                    .into_iter()
                    .next()
                    .ok_or("parent selector returned no individuals")?;
                parents.push(parent);
            }

            let genotypes = parents.iter().map(|parent| parent.genotype()).collect::<Vec<_>>();
            let child = variation.apply(genotypes.as_slice(), random);
            let lineage = parents.iter().map(Arc::downgrade).collect::<Vec<_>>();

            offspring.push((child, lineage));
        }

        let birth_iteration = state.n_of_iterations() + 1;
        let children = self.evaluate_all(offspring, birth_iteration, &problem, environment)?;
        let n_of_births = children.len();

        let survivors = state.population().all().cloned().collect::<Vec<_>>();
        let (survivors, remap_evaluations) = if self.remap {
            let n = survivors.len();
            (self.remap_all(survivors, &problem, environment)?, n)
        } else {
            (survivors, 0)
        };

        let comparator = individual_comparator(problem.comparator());
        let merged =
            PartiallyOrderedCollection::from(survivors.into_iter().chain(children), comparator.clone());
        let next = Self::truncate(merged, self.population_size, random);
        let population = PartiallyOrderedCollection::from(next, comparator);

        Ok(state.updated_with_iteration(n_of_births, n_of_births + remap_evaluations, population))
    }

    fn solutions(&self, state: &Self::State) -> Vec<Self::Solution> {
        state.population().firsts().map(|individual| individual.solution().clone()).collect()
    }
}
