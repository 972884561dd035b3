use rand::{distributions::Uniform, thread_rng, Rng};

/// The line being fitted: `y = weight * x + bias`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub weight: f32,
    pub bias: f32,
}

impl LinearModel {
    pub fn new(weight: f32, bias: f32) -> Self {
        Self { weight, bias }
    }

    /// Weight and bias sampled uniformly from [0, 1).
    pub fn random() -> Self {
        let mut rng = thread_rng();
        let uniform = Uniform::new(0.0, 1.0);
        Self {
            weight: rng.sample(uniform),
            bias: rng.sample(uniform),
        }
    }

    pub fn predict(&self, x: f32) -> f32 {
        self.weight * x + self.bias
    }
}
