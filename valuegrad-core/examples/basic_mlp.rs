//! # Training a small MLP on four points
//!
//! Builds a network with input width 3 and layers `[4, 4, 1]`, trains it for 20
//! epochs of full-batch gradient descent (learning rate 0.1) and prints the loss of
//! every epoch followed by the final predictions.
//!
//! ## Running
//! `cargo run --example basic_mlp`

use valuegrad_core::train::{EpochStats, FnReporter};
use valuegrad_core::utils::testing::seeded_rng;
use valuegrad_core::{Graph, GradError, Mlp, TrainConfig};

fn main() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let mut rng = seeded_rng(42);
    let mlp = Mlp::new(&mut graph, 3, &[4, 4, 1], &mut rng)?;

    let xs = vec![
        vec![-2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut printer = FnReporter(|s: &EpochStats| println!("{} Loss : {}", s.epoch, s.loss));
    mlp.train(&mut graph, &TrainConfig::default(), &xs, &ys, &mut printer)?;

    let predictions = xs
        .iter()
        .map(|x| mlp.predict_scalar(&mut graph, x))
        .collect::<Result<Vec<_>, _>>()?;
    println!("{:?}", predictions);
    Ok(())
}
