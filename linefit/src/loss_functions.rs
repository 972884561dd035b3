use std::error::Error;

use plotters::{
    prelude::{BitMapBackend, ChartBuilder, IntoDrawingArea, LabelAreaPosition},
    series::LineSeries,
    style::{GREEN, WHITE},
};

use crate::{dataset::Dataset, model::LinearModel};

pub struct IterationLoss {
    pub iteration: usize,
    pub loss: f32,
}

impl From<&IterationLoss> for (usize, f32) {
    fn from(e: &IterationLoss) -> Self {
        let IterationLoss { iteration, loss } = e;
        (*iteration, *loss)
    }
}

pub fn plot_loss(iteration_loss: Vec<IterationLoss>, path: &str) -> Result<(), Box<dyn Error>> {
    let max_iteration = iteration_loss
        .iter()
        .map(|x| x.iteration)
        .max()
        .ok_or("No recorded losses to plot")?;
    let max_loss = iteration_loss
        .iter()
        .map(|x| x.loss)
        .reduce(f32::max)
        .ok_or("No recorded losses to plot")?;
    let root_area = BitMapBackend::new(path, (1920, 1080)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root_area)
        .set_label_area_size(LabelAreaPosition::Left, 40)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .caption("Error", ("sans-serif", 40))
        .build_cartesian_2d(0..max_iteration, 0.0..(max_loss + 1.0))?;

    ctx.configure_mesh().draw()?;

    ctx.draw_series(LineSeries::new(
        iteration_loss.iter().map(|point| point.into()),
        &GREEN,
    ))?;
    Ok(())
}

/// Mean squared error of the model's predictions over the whole dataset.
pub fn mse_loss(model: &LinearModel, data: &Dataset) -> f32 {
    let mut error = 0.0;
    for (x, y) in data.points() {
        error += (y - model.predict(x)).powi(2);
    }
    error / data.len() as f32
}
