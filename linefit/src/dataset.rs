/// The observations a line is fitted against. Immutable for the whole run.
pub struct Dataset {
    xs: Vec<f32>,
    ys: Vec<f32>,
}

impl Dataset {
    /// # Panics
    ///
    /// Panics if the input and target lengths differ, or if the sequences
    /// are empty.
    pub fn new(xs: Vec<f32>, ys: Vec<f32>) -> Self {
        if xs.len() != ys.len() {
            panic!("Input and target dimensions must match");
        }
        if xs.is_empty() {
            panic!("Dataset must hold at least one point");
        }
        Self { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Paired `(x, y)` iteration over the observations.
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    pub fn xs(&self) -> &[f32] {
        &self.xs
    }

    pub fn ys(&self) -> &[f32] {
        &self.ys
    }
}
