// valuegrad-core/src/nn/losses/mse.rs

use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use crate::nn::module::check_width;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors: 'sum' | 'mean'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// Plain sum of squared errors. Used by the training loop.
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = GradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(GradError::InvalidConfig(format!("Unsupported reduction type: {}", s))),
        }
    }
}

/// Squared-error loss between scalar prediction nodes and plain-number targets.
///
/// With the default [`Reduction::Sum`] no `1/n` factor is applied.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node `0 + Σ (pred_i - target_i)²` (divided by `n` for `Mean`).
    ///
    /// Each difference is `pred + lift(-target)` and the reduction starts from a
    /// lifted `0.0` leaf, so every term is an ordinary graph node.
    ///
    /// # Errors
    /// * `EmptyInput` if there are no predictions.
    /// * `ShapeMismatch` if `predictions.len() != targets.len()`.
    pub fn calculate(
        &self,
        graph: &mut Graph,
        predictions: &[ValueId],
        targets: &[f64],
    ) -> Result<ValueId, GradError> {
        if predictions.is_empty() {
            return Err(GradError::EmptyInput("MseLoss calculate".to_string()));
        }
        check_width(predictions.len(), targets.len(), "MseLoss calculate")?;

        let mut squared = Vec::with_capacity(predictions.len());
        for (&pred, &target) in predictions.iter().zip(targets) {
            let neg_target = graph.lift(-target);
            let diff = graph.add(pred, neg_target)?;
            squared.push(graph.pow(diff, 2.0)?);
        }
        let zero = graph.lift(0.0);
        let total = graph.sum_from(zero, &squared)?;

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let n = graph.lift(predictions.len() as f64);
                graph.div(total, n)
            }
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
