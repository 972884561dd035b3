#![deny(warnings)]

pub mod dataset;
pub mod fit;
pub mod loss_functions;
pub mod model;
