//! This crate exposes a generic population-based solver infrastructure together with a
//! cooperative coevolutionary composition of two such solvers, and some helper
//! functionality which can be used to build a solver for optimization problems.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evolution;
pub mod example;
pub mod population;
pub mod prelude;
pub mod termination;
pub mod utils;
