use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use crate::optim::optimizer_trait::Optimizer;
use log::debug;

/// Learning rate used when none is configured.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Plain gradient descent: `value ← value − lr × grad` for every parameter.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<ValueId>,
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Arguments
    ///
    /// * `params`: Parameter nodes to update, typically `Module::parameters()`.
    /// * `lr`: The learning rate.
    ///
    /// # Errors
    /// `InvalidConfig` if `lr` is not finite and strictly positive.
    pub fn new(params: Vec<ValueId>, lr: f64) -> Result<Self, GradError> {
        validate_lr(lr)?;
        Ok(Sgd { params, lr })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), GradError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }
}

pub(crate) fn validate_lr(lr: f64) -> Result<(), GradError> {
    if !(lr.is_finite() && lr > 0.0) {
        return Err(GradError::InvalidConfig(format!(
            "learning rate must be finite and positive, got {}",
            lr
        )));
    }
    Ok(())
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph) -> Result<(), GradError> {
        for &param in &self.params {
            let node = graph.node(param)?;
            let updated = node.value() - self.lr * node.grad();
            graph.set_value(param, updated)?;
        }
        debug!("sgd step: updated {} parameters with lr {}", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), GradError> {
        graph.zero_grad(&self.params)
    }

    fn params(&self) -> &[ValueId] {
        &self.params
    }
}

// Declare test module conditionally
#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
