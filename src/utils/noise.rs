use crate::utils::{Float, Random};
use std::sync::Arc;

/// Provides a way to distort a value with gaussian noise applied with some probability.
#[derive(Clone)]
pub struct Noise {
    probability: Float,
    std_dev: Float,
    random: Arc<dyn Random>,
}

impl Noise {
    /// Creates a new instance of `Noise`.
    pub fn new(probability: Float, std_dev: Float, random: Arc<dyn Random>) -> Self {
        Self { probability, std_dev, random }
    }

    /// Generates an output value based on given input value.
    pub fn generate(&self, value: Float) -> Float {
        if self.random.is_hit(self.probability) {
            value + self.random.gaussian(0., self.std_dev)
        } else {
            value
        }
    }
}
