use crate::error::GradError;
use crate::graph::{Graph, ValueId};

/// Trait defining the common interface for all optimizers.
///
/// Optimizers hold the ids of the parameter nodes they manage and update the
/// nodes' values in the graph from their accumulated gradients.
pub trait Optimizer {
    /// Performs a single optimization step using the gradients currently stored
    /// on the parameters.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or `UnknownNode` if a parameter no
    /// longer exists in `graph`.
    fn step(&mut self, graph: &mut Graph) -> Result<(), GradError>;

    /// Clears the gradients of all managed parameters.
    ///
    /// Must run before every backward pass: `backward()` accumulates.
    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), GradError>;

    /// Returns the managed parameter ids.
    fn params(&self) -> &[ValueId];
}
