use super::*;
use crate::evolution::individual_comparator;
use crate::helpers::evolution::{create_scalar_individual, minimizing_comparator};
use crate::population::PartiallyOrderedCollection;
use crate::utils::Float;

fn create_population(qualities: &[Float]) -> PartiallyOrderedCollection<Arc<Individual<(), (), Float>>> {
    PartiallyOrderedCollection::from(
        qualities.iter().enumerate().map(|(idx, &quality)| create_scalar_individual(quality, idx)),
        individual_comparator(minimizing_comparator()),
    )
}

#[test]
fn can_start_with_zero_iterations() {
    let state = SearchState::new(create_population(&[1., 2.]), 2, 2);

    assert_eq!(state.n_of_iterations(), 0);
    assert_eq!(state.n_of_births(), 2);
    assert_eq!(state.n_of_quality_evaluations(), 2);
    assert_eq!(state.population().size(), 2);
}

#[test]
fn can_accumulate_counters_across_iterations() {
    let state = SearchState::new(create_population(&[1.]), 1, 1);

    let state = state.updated_with_iteration(4, 6, create_population(&[1., 2.]));
    let state = state.updated_with_iteration(4, 4, create_population(&[1.]));

    assert_eq!(state.n_of_iterations(), 2);
    assert_eq!(state.n_of_births(), 9);
    assert_eq!(state.n_of_quality_evaluations(), 11);
    assert_eq!(state.population().size(), 1);
}

#[test]
fn can_clone_state_without_resetting_counters() {
    let state = SearchState::new(create_population(&[1.]), 1, 1)
        .updated_with_iteration(2, 2, create_population(&[1.]));

    let cloned = state.clone();

    assert_eq!(cloned.n_of_iterations(), state.n_of_iterations());
    assert_eq!(cloned.n_of_births(), state.n_of_births());
    assert_eq!(cloned.n_of_quality_evaluations(), state.n_of_quality_evaluations());
}
