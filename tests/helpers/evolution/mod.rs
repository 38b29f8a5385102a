use crate::evolution::*;
use crate::population::{from_total_order, PartialComparator, PartiallyOrderedCollection};
use crate::utils::{compare_floats_refs, Float, Random, SolverResult};
use std::sync::Arc;

/// A comparator over integers using their natural ascending order.
pub fn natural_comparator() -> Arc<dyn PartialComparator<i32>> {
    Arc::new(from_total_order(|left: &i32, right: &i32| left.cmp(right)))
}

/// A comparator over floats which prefers smaller values.
pub fn minimizing_comparator() -> Arc<dyn PartialComparator<Float>> {
    Arc::new(from_total_order(compare_floats_refs))
}

/// A Pareto comparator over integer pairs where smaller is better in both dimensions.
pub fn pareto_pair_comparator() -> Arc<dyn PartialComparator<(i32, i32)>> {
    Arc::new(|left: &(i32, i32), right: &(i32, i32)| {
        use crate::population::PartialOrdering::*;
        match (left.0.cmp(&right.0), left.1.cmp(&right.1)) {
            (std::cmp::Ordering::Equal, std::cmp::Ordering::Equal) => Same,
            (std::cmp::Ordering::Greater, std::cmp::Ordering::Less)
            | (std::cmp::Ordering::Less, std::cmp::Ordering::Greater) => NotComparable,
            (std::cmp::Ordering::Greater, _) | (_, std::cmp::Ordering::Greater) => After,
            _ => Before,
        }
    })
}

/// Creates a collection of plain integers ordered naturally.
pub fn create_natural_collection(values: Vec<i32>) -> PartiallyOrderedCollection<i32> {
    PartiallyOrderedCollection::from(values, natural_comparator())
}

/// Creates a composite-style individual with no genotype and no solution payload.
pub fn create_scalar_individual(quality: Float, birth_iteration: usize) -> Arc<Individual<(), (), Float>> {
    Arc::new(Individual::new((), (), quality, birth_iteration, vec![]))
}

/// Creates a state of composite-style individuals advanced to given iteration.
pub fn create_scalar_state(iterations: usize) -> SearchState<(), (), Float> {
    let population = || {
        PartiallyOrderedCollection::from(
            vec![create_scalar_individual(5., 0)],
            individual_comparator(minimizing_comparator()),
        )
    };

    let mut state = SearchState::new(population(), 1, 1);
    for _ in 0..iterations {
        state = state.updated_with_iteration(0, 0, population());
    }

    state
}

/// A problem which scores a scalar solution with given function.
pub fn create_scalar_problem<F>(quality_fn: F) -> Arc<dyn Problem<Solution = Float, Quality = Float>>
where
    F: Fn(&Float) -> SolverResult<Float> + Send + Sync + 'static,
{
    Arc::new(SharedProblem::new(Arc::new(quality_fn), minimizing_comparator()))
}

/// A factory which produces predefined scalar genotypes, cycling over them.
pub fn create_fixed_factory(values: Vec<Float>) -> impl GenotypeFactory<Float> {
    move |n: usize, _: &dyn Random| (0..n).map(|idx| values[idx % values.len()]).collect()
}

/// A mapper which uses the scalar genotype as the solution itself.
pub fn create_identity_mapper() -> impl SolutionMapper<Float, Float> {
    |genotype: &Float| Ok(*genotype)
}

/// A unary variation which adds a fixed offset to the scalar genotype.
pub struct OffsetVariation {
    pub offset: Float,
}

impl Variation<Float> for OffsetVariation {
    fn arity(&self) -> usize {
        1
    }

    fn apply(&self, parents: &[&Float], _: &dyn Random) -> Float {
        *parents[0] + self.offset
    }
}

/// Builds a solver over scalar genotypes from predefined initial values.
pub fn create_scalar_solver(
    initial: Vec<Float>,
    population_size: usize,
    offspring_size: usize,
    offset: Float,
) -> SolverResult<PopulationSolver<Float, Float, Float>> {
    PopulationSolverBuilder::default()
        .with_population_size(population_size)
        .with_offspring_size(offspring_size)
        .with_factory(Arc::new(create_fixed_factory(initial)))
        .with_mapper(Arc::new(create_identity_mapper()))
        .with_variation(Arc::new(OffsetVariation { offset }), 1)
        .build()
}
