use crate::population::{PartialComparator, PartialOrdering};
use std::sync::{Arc, Weak};

/// An immutable record pairing a genotype, a derived solution, a quality value and
/// lineage metadata. A "mutated" individual is always a fresh value; individuals are
/// shared as `Arc` and never modified after construction.
pub struct Individual<G, S, Q> {
    genotype: G,
    solution: S,
    quality: Q,
    birth_iteration: usize,
    // lineage only: a parent always has a strictly smaller birth iteration, so the
    // lineage graph is acyclic by construction
    parents: Vec<Weak<Individual<G, S, Q>>>,
}

impl<G, S, Q> Individual<G, S, Q> {
    /// Creates a new instance of `Individual`.
    pub fn new(
        genotype: G,
        solution: S,
        quality: Q,
        birth_iteration: usize,
        parents: Vec<Weak<Individual<G, S, Q>>>,
    ) -> Self {
        Self { genotype, solution, quality, birth_iteration, parents }
    }

    /// Returns the genotype.
    pub fn genotype(&self) -> &G {
        &self.genotype
    }

    /// Returns the derived solution.
    pub fn solution(&self) -> &S {
        &self.solution
    }

    /// Returns the quality value.
    pub fn quality(&self) -> &Q {
        &self.quality
    }

    /// Returns the iteration at which the individual was born.
    pub fn birth_iteration(&self) -> usize {
        self.birth_iteration
    }

    /// Returns still-alive parents of the individual.
    pub fn parents(&self) -> impl Iterator<Item = Arc<Individual<G, S, Q>>> + '_ {
        self.parents.iter().filter_map(|parent| parent.upgrade())
    }

    /// Creates a fresh individual with the same genotype, solution and lineage, but a new
    /// quality value. Used when a survivor is re-evaluated against a changed problem.
    pub fn with_quality(&self, quality: Q) -> Self
    where
        G: Clone,
        S: Clone,
    {
        Self {
            genotype: self.genotype.clone(),
            solution: self.solution.clone(),
            quality,
            birth_iteration: self.birth_iteration,
            parents: self.parents.clone(),
        }
    }
}

/// Lifts a quality comparator to a comparator over shared individuals.
pub fn individual_comparator<G, S, Q>(
    comparator: Arc<dyn PartialComparator<Q>>,
) -> Arc<dyn PartialComparator<Arc<Individual<G, S, Q>>>>
where
    G: Send + Sync + 'static,
    S: Send + Sync + 'static,
    Q: Send + Sync + 'static,
{
    Arc::new(move |left: &Arc<Individual<G, S, Q>>, right: &Arc<Individual<G, S, Q>>| -> PartialOrdering {
        comparator.compare(left.quality(), right.quality())
    })
}
