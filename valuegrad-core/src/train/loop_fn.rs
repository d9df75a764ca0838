use log::{debug, warn};

use crate::error::GradError;
use crate::graph::Graph;
use crate::model::Mlp;
use crate::nn::module::{check_width, Module};
use crate::nn::MseLoss;
use crate::optim::{Optimizer, Sgd};
use crate::train::epoch_stats::EpochStats;
use crate::train::reporter::EpochReporter;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs of full-batch gradient descent.
///
/// Every epoch evaluates the network on all `inputs`, builds the summed squared
/// error against `targets`, zeroes the parameter gradients, runs `backward()` on
/// the loss and applies one SGD update. The nodes built during the epoch are
/// discarded afterwards; only the parameter values carry over.
///
/// # Arguments
/// - `graph`:    the graph owning the network's parameters
/// - `network`:  a single-output network
/// - `config`:   epoch count and learning rate
/// - `inputs`:   training samples, each of width `network.nin()`
/// - `targets`:  one scalar target per sample
/// - `reporter`: receives the stats of every epoch
///
/// # Returns
/// The stats of every epoch, in order. The loss of an epoch is measured before that
/// epoch's update.
///
/// # Errors
/// - `InvalidConfig` if the learning rate is not finite and positive.
/// - `EmptyInput` if `inputs` is empty.
/// - `ShapeMismatch` if `inputs` and `targets` differ in length, a sample has the
///   wrong width, or the network does not have exactly one output.
///
/// Nothing is modified when validation fails.
pub fn train(
    graph: &mut Graph,
    network: &Mlp,
    config: &TrainConfig,
    inputs: &[Vec<f64>],
    targets: &[f64],
    reporter: &mut dyn EpochReporter,
) -> Result<Vec<EpochStats>, GradError> {
    config.validate()?;
    if inputs.is_empty() {
        return Err(GradError::EmptyInput("train inputs".to_string()));
    }
    check_width(inputs.len(), targets.len(), "train targets")?;
    check_width(1, network.nout(), "train network output")?;
    for input in inputs {
        check_width(network.nin(), input.len(), "train input")?;
    }

    let mut optimizer = Sgd::new(network.parameters(), config.learning_rate)?;
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 0..config.epochs {
        let checkpoint = graph.checkpoint();
        let result = run_one_epoch(graph, network, &mut optimizer, inputs, targets);
        debug!(
            "epoch {}: {} parameters, {} graph nodes",
            epoch,
            optimizer.params().len(),
            graph.len()
        );
        graph.rewind(checkpoint)?;
        let loss = result?;

        if !loss.is_finite() {
            warn!("epoch {}: loss is not finite ({})", epoch, loss);
        }

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            loss,
        };
        reporter.report(&stats);
        history.push(stats);
    }

    Ok(history)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Runs one full-batch step and returns the loss measured before the update.
fn run_one_epoch(
    graph: &mut Graph,
    network: &Mlp,
    optimizer: &mut Sgd,
    inputs: &[Vec<f64>],
    targets: &[f64],
) -> Result<f64, GradError> {
    let predictions = inputs
        .iter()
        .map(|input| network.forward_scalar(graph, input))
        .collect::<Result<Vec<_>, _>>()?;
    let loss = MseLoss::default().calculate(graph, &predictions, targets)?;

    optimizer.zero_grad(graph)?;
    graph.backward(loss)?;
    optimizer.step(graph)?;

    graph.value(loss)
}

#[cfg(test)]
#[path = "loop_fn_test.rs"]
mod tests;
