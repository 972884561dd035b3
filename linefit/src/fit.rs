use crate::{dataset::Dataset, loss_functions::mse_loss, model::LinearModel};

/// Batch gradient descent over a fixed dataset.
///
/// The hyperparameters are set once at construction and never change. There
/// is no convergence or divergence detection: a learning rate that is too
/// large for the scale of the inputs makes the error grow without bound,
/// which is a known sensitivity of the method.
pub struct GradientDescent {
    learning_rate: f32,
    num_iterations: usize,
}

impl GradientDescent {
    /// # Panics
    ///
    /// Panics unless the learning rate is positive and finite.
    pub fn new(learning_rate: f32, num_iterations: usize) -> Self {
        if !(learning_rate > 0.0 && learning_rate.is_finite()) {
            panic!("Learning rate must be positive and finite");
        }
        Self {
            learning_rate,
            num_iterations,
        }
    }

    /// One gradient step over the entire dataset.
    ///
    /// The derivatives of the mean squared error with respect to the weight
    /// and the bias are accumulated across every point, then both parameters
    /// move one learning-rate-sized step against them.
    pub fn step(&self, model: LinearModel, data: &Dataset) -> LinearModel {
        let mut weight_derivative = 0.0;
        let mut bias_derivative = 0.0;
        for (x, y) in data.points() {
            let residual = y - model.predict(x);
            weight_derivative += -2.0 * x * residual;
            bias_derivative += -2.0 * residual;
        }

        let n = data.len() as f32;
        LinearModel {
            weight: model.weight - self.learning_rate * (weight_derivative / n),
            bias: model.bias - self.learning_rate * (bias_derivative / n),
        }
    }

    /// Runs the configured number of steps and returns the final parameters,
    /// whether or not the error improved along the way.
    pub fn train(&self, mut model: LinearModel, data: &Dataset) -> LinearModel {
        for _ in 0..self.num_iterations {
            model = self.step(model, data);
        }
        model
    }

    /// Same loop as [`train`](Self::train), calling the observer once per
    /// iteration with the iteration index, the updated parameters and the
    /// error recomputed after the update. Progress narration lives in the
    /// caller, not here.
    pub fn train_with_observer<F>(
        &self,
        mut model: LinearModel,
        data: &Dataset,
        mut observer: F,
    ) -> LinearModel
    where
        F: FnMut(usize, LinearModel, f32),
    {
        for iteration in 0..self.num_iterations {
            model = self.step(model, data);
            observer(iteration, model, mse_loss(&model, data));
        }
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_dataset() -> Dataset {
        Dataset::new(vec![3520.0, 192.0, 91.0, 9271.0], vec![20.0, 3.0, 0.0, 88.0])
    }

    #[test]
    fn test_step_matches_hand_computed_gradients() {
        // Residuals from (0, 0) are 2 and 3, so
        // dW = (-2 * 1 * 2 + -2 * 2 * 3) / 2 = -8
        // dB = (-2 * 2 + -2 * 3) / 2 = -5
        let data = Dataset::new(vec![1.0, 2.0], vec![2.0, 3.0]);
        let optimizer = GradientDescent::new(0.1, 1);
        let updated = optimizer.step(LinearModel::new(0.0, 0.0), &data);
        assert!((updated.weight - 0.8).abs() < 1e-6, "{}", updated.weight);
        assert!((updated.bias - 0.5).abs() < 1e-6, "{}", updated.bias);
    }

    #[test]
    fn test_zero_iterations_returns_initial_params() {
        let data = demo_dataset();
        let optimizer = GradientDescent::new(0.00000004, 0);
        let initial = LinearModel::new(0.3, 0.7);
        let real = optimizer.train(initial, &data);
        assert_eq!(initial, real);
    }

    #[test]
    fn test_error_drops_on_linear_dataset() {
        // y = 2x + 5 exactly, so with a small enough rate the error after
        // the last iteration has to land below the starting error
        let data = Dataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![5.0, 7.0, 9.0, 11.0]);
        let optimizer = GradientDescent::new(0.05, 200);
        let initial = LinearModel::new(0.0, 0.0);

        let initial_error = mse_loss(&initial, &data);
        let fitted = optimizer.train(initial, &data);
        let final_error = mse_loss(&fitted, &data);
        assert!(
            final_error < initial_error,
            "{}, {}",
            final_error,
            initial_error
        );
        assert!((fitted.weight - 2.0).abs() < 0.5, "{}", fitted.weight);
    }

    #[test]
    fn test_error_is_non_increasing_early_on() {
        // 4e-8 is tuned to this dataset's scale, the first steps must not
        // overshoot
        let data = demo_dataset();
        let optimizer = GradientDescent::new(0.00000004, 1);
        let mut model = LinearModel::new(0.0, 0.0);
        let mut previous_error = mse_loss(&model, &data);

        for _ in 0..5 {
            model = optimizer.step(model, &data);
            let error = mse_loss(&model, &data);
            assert!(error <= previous_error, "{}, {}", error, previous_error);
            previous_error = error;
        }
    }

    #[test]
    fn test_observer_sees_every_iteration() {
        let data = demo_dataset();
        let optimizer = GradientDescent::new(0.00000004, 10);
        let mut seen = Vec::new();
        optimizer.train_with_observer(LinearModel::new(0.0, 0.0), &data, |iteration, _, loss| {
            seen.push((iteration, loss));
        });

        assert_eq!(10, seen.len());
        for (expected, (real, loss)) in seen.iter().enumerate() {
            assert_eq!(expected, *real);
            assert!(loss.is_finite());
        }
    }

    #[test]
    fn test_observer_free_train_matches_observed_train() {
        let data = demo_dataset();
        let optimizer = GradientDescent::new(0.00000004, 50);
        let initial = LinearModel::new(0.0, 0.0);

        let plain = optimizer.train(initial, &data);
        let observed = optimizer.train_with_observer(initial, &data, |_, _, _| ());
        assert_eq!(plain, observed);
    }

    #[test]
    #[should_panic(expected = "positive and finite")]
    fn test_negative_learning_rate() {
        GradientDescent::new(-0.1, 10);
    }

    #[test]
    #[should_panic(expected = "positive and finite")]
    fn test_zero_learning_rate() {
        GradientDescent::new(0.0, 10);
    }
}
