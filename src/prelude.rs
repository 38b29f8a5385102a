//! This module reimports a commonly used types to the root namespace.

pub use crate::evolution::{
    CooperativeSolver, CooperativeState, GenotypeFactory, Individual, IterativeSolver,
    PopulationSolver, PopulationSolverBuilder, Problem, SearchState, SharedProblem,
    SolutionMapper, SolverState, Variation,
};

pub use crate::evolution::aggregation::{
    FirstQuality, LastQuality, MedianQuality, QualityAggregator,
};

pub use crate::evolution::selection::{Best, Complete, RandomOne, Selector, Tournament};

pub use crate::population::{
    from_total_order, PartialComparator, PartialOrdering, PartiallyOrderedCollection,
};

pub use crate::termination::{
    CompositeAll, CompositeAny, MaxIteration, MaxMillis, TargetQuality, Termination,
};

pub use crate::utils::{
    DefaultRandom, Environment, Float, InfoLogger, Random, SolverError, SolverResult,
};
