#![deny(warnings)]

use std::error::Error;

use linefit::{
    dataset::Dataset,
    fit::GradientDescent,
    loss_functions::{mse_loss, plot_loss, IterationLoss},
    model::LinearModel,
};
use log::info;

// 4e-8 is tuned to the scale of this particular dataset; a general-purpose
// rate would need the inputs normalized first
const LEARNING_RATE: f32 = 0.00000004;
const NUM_ITERATIONS: usize = 2000;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let data = Dataset::new(
        vec![3520.0, 192.0, 91.0, 9271.0],
        vec![20.0, 3.0, 0.0, 88.0],
    );

    let initial = LinearModel::random();
    println!(
        "Initial weight {}, initial bias {}, learning rate {}, iterations {}",
        initial.weight, initial.bias, LEARNING_RATE, NUM_ITERATIONS
    );

    let optimizer = GradientDescent::new(LEARNING_RATE, NUM_ITERATIONS);
    let mut iteration_loss = Vec::new();
    let fitted = optimizer.train_with_observer(initial, &data, |iteration, model, loss| {
        info!(
            "iteration: {}, weight: {:.4}, bias: {:.4}, error: {:.2}",
            iteration, model.weight, model.bias, loss
        );
        iteration_loss.push(IterationLoss {
            iteration,
            loss,
        });
    });

    let final_error = mse_loss(&fitted, &data);
    println!(
        "Final weight {:.4}, final bias {:.4}, final error {:.4}",
        fitted.weight, fitted.bias, final_error
    );
    println!(
        "Prediction {:.4} out of {}, prediction two {:.4} out of {}",
        fitted.predict(data.xs()[1]),
        data.ys()[1],
        fitted.predict(data.xs()[3]),
        data.ys()[3]
    );

    plot_loss(iteration_loss, "loss.png")?;

    Ok(())
}
