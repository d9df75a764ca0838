use super::{Graph, ValueId};
use crate::autograd;
use crate::error::GradError;

impl Graph {
    /// Performs the backward pass starting from `output`.
    ///
    /// See [`autograd::backward`] for the accumulation contract.
    pub fn backward(&mut self, output: ValueId) -> Result<(), GradError> {
        autograd::backward(self, output)
    }

    /// Resets the gradients of `ids` to 0.0.
    ///
    /// Must be called on every parameter before each backward pass.
    pub fn zero_grad(&mut self, ids: &[ValueId]) -> Result<(), GradError> {
        for &id in ids {
            self.set_grad(id, 0.0)?;
        }
        Ok(())
    }

    /// Resets every gradient held by the graph.
    pub fn zero_all_grads(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = 0.0;
        }
    }
}
