//! This module contains example models and logic to demonstrate practical usage of the crate:
//! a continuous vector optimization problem with classic benchmark functions.

#[cfg(test)]
#[path = "../tests/unit/example_test.rs"]
mod example_test;

use crate::evolution::*;
use crate::population::{from_total_order, PartialComparator};
use crate::utils::{compare_floats_refs, Float, Noise, Random, SolverResult};
use std::sync::Arc;

/// An objective function which calculates a fitness of a vector.
pub type FitnessFn = Arc<dyn Fn(&[Float]) -> Float + Send + Sync>;

/// An example minimization problem over real-valued vectors.
pub struct VectorProblem {
    fitness_fn: FitnessFn,
    comparator: Arc<dyn PartialComparator<Float>>,
}

impl VectorProblem {
    /// Creates a new instance of `VectorProblem` which minimizes given fitness function.
    pub fn new(fitness_fn: FitnessFn) -> Self {
        Self { fitness_fn, comparator: Arc::new(from_total_order(compare_floats_refs)) }
    }
}

impl Problem for VectorProblem {
    type Solution = Vec<Float>;
    type Quality = Float;

    fn evaluate(&self, solution: &Self::Solution) -> SolverResult<Self::Quality> {
        Ok((self.fitness_fn)(solution.as_slice()))
    }

    fn comparator(&self) -> Arc<dyn PartialComparator<Self::Quality>> {
        self.comparator.clone()
    }
}

/// Samples genotypes uniformly within a symmetric range around zero.
pub struct UniformVectorFactory {
    dimension: usize,
    min: Float,
    max: Float,
}

impl UniformVectorFactory {
    /// Creates a new instance of `UniformVectorFactory`.
    pub fn new(dimension: usize, min: Float, max: Float) -> Self {
        assert!(dimension > 0);
        assert!(min < max);
        Self { dimension, min, max }
    }
}

impl GenotypeFactory<Vec<Float>> for UniformVectorFactory {
    fn build(&self, n: usize, random: &dyn Random) -> Vec<Vec<Float>> {
        (0..n)
            .map(|_| (0..self.dimension).map(|_| random.uniform_real(self.min, self.max)).collect())
            .collect()
    }
}

/// Maps a vector genotype to a solution as-is.
pub struct IdentityMapper;

impl SolutionMapper<Vec<Float>, Vec<Float>> for IdentityMapper {
    fn map(&self, genotype: &Vec<Float>) -> SolverResult<Vec<Float>> {
        Ok(genotype.clone())
    }
}

/// A mutation which perturbs each dimension with gaussian noise applied with some probability.
pub struct GaussianMutation {
    probability: Float,
    std_dev: Float,
}

impl GaussianMutation {
    /// Creates a new instance of `GaussianMutation`.
    pub fn new(probability: Float, std_dev: Float) -> Self {
        Self { probability, std_dev }
    }
}

impl Variation<Vec<Float>> for GaussianMutation {
    fn arity(&self) -> usize {
        1
    }

    fn apply(&self, parents: &[&Vec<Float>], random: &dyn Random) -> Vec<Float> {
        parents[0]
            .iter()
            .map(|&value| {
                if random.is_hit(self.probability) {
                    value + random.gaussian(0., self.std_dev)
                } else {
                    value
                }
            })
            .collect()
    }
}

/// A crossover which picks each dimension from either parent with equal probability.
pub struct UniformCrossover;

impl Variation<Vec<Float>> for UniformCrossover {
    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, parents: &[&Vec<Float>], random: &dyn Random) -> Vec<Float> {
        parents[0]
            .iter()
            .zip(parents[1].iter())
            .map(|(&left, &right)| if random.is_hit(0.5) { left } else { right })
            .collect()
    }
}

/// Wraps a fitness function so that its output is distorted by given noise.
pub fn create_noisy_function(fitness_fn: FitnessFn, noise: Noise) -> FitnessFn {
    Arc::new(move |input| noise.generate((fitness_fn)(input)))
}

/// Returns the rosenbrock function, also referred to as the valley or banana function.
/// The global minimum is 0 at `(1, ..., 1)`.
pub fn create_rosenbrock_function() -> FitnessFn {
    Arc::new(|input| {
        assert!(input.len() > 1);

        input.windows(2).fold(0., |acc, pair| {
            let (x1, x2) = match pair {
                [x1, x2] => (*x1, *x2),
                _ => unreachable!(),
            };

            acc + 100. * (x2 - x1.powi(2)).powi(2) + (x1 - 1.).powi(2)
        })
    })
}

/// Returns the sphere function. The global minimum is 0 at the origin.
pub fn create_sphere_function() -> FitnessFn {
    Arc::new(|input| input.iter().map(|&x| x * x).sum())
}
