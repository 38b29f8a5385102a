#[cfg(test)]
#[path = "../../tests/unit/termination/target_quality_test.rs"]
mod target_quality_test;

use super::Termination;
use crate::evolution::{CooperativeState, Individual, SearchState};
use crate::population::{PartialComparator, PartialOrdering, PartiallyOrderedCollection};
use crate::utils::Float;
use std::sync::Arc;

/// A termination criteria which is in terminated state once any non-dominated individual
/// reaches given target quality or beats it.
pub struct TargetQuality<Q> {
    target: Q,
    comparator: Arc<dyn PartialComparator<Q>>,
}

impl<Q> TargetQuality<Q> {
    /// Creates a new instance of `TargetQuality`.
    pub fn new(target: Q, comparator: Arc<dyn PartialComparator<Q>>) -> Self {
        Self { target, comparator }
    }

    fn is_reached<G, S>(
        &self,
        population: &PartiallyOrderedCollection<Arc<Individual<G, S, Q>>>,
    ) -> bool {
        population.firsts().any(|individual| {
            matches!(
                self.comparator.compare(individual.quality(), &self.target),
                PartialOrdering::Before | PartialOrdering::Same
            )
        })
    }
}

impl<G, S, Q> Termination<SearchState<G, S, Q>> for TargetQuality<Q> {
    fn is_termination(&self, state: &SearchState<G, S, Q>) -> bool {
        self.is_reached(state.population())
    }

    fn estimate(&self, state: &SearchState<G, S, Q>) -> Float {
        if self.is_termination(state) {
            1.
        } else {
            0.
        }
    }
}

impl<G1, S1, G2, S2, S, Q> Termination<CooperativeState<G1, S1, G2, S2, S, Q>> for TargetQuality<Q> {
    fn is_termination(&self, state: &CooperativeState<G1, S1, G2, S2, S, Q>) -> bool {
        self.is_reached(state.population())
    }

    fn estimate(&self, state: &CooperativeState<G1, S1, G2, S2, S, Q>) -> Float {
        if self.is_termination(state) {
            1.
        } else {
            0.
        }
    }
}
