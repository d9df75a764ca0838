use crate::error::GradError;
use crate::graph::{Graph, ValueId};

/// The base trait for all network components (neurons, layers, whole networks).
///
/// A module owns long-lived parameter nodes inside a [`Graph`] and knows how to
/// build the ephemeral part of the graph that evaluates it on a given input.
pub trait Module: std::fmt::Debug {
    /// Builds the forward computation on `graph`.
    ///
    /// # Arguments
    /// * `graph`: The graph holding this module's parameters.
    /// * `input`: Input nodes; the length must equal the module's input width.
    ///
    /// # Returns
    /// One output node per output unit, never empty.
    ///
    /// # Errors
    /// `ShapeMismatch` if `input` has the wrong length, `UnknownNode` if an input or
    /// parameter does not belong to `graph`.
    fn forward(&self, graph: &mut Graph, input: &[ValueId]) -> Result<Vec<ValueId>, GradError>;

    /// Returns every learnable parameter node in a stable order.
    fn parameters(&self) -> Vec<ValueId>;

    /// Returns every learnable parameter with a hierarchical name
    /// (e.g. `"layers.0.neurons.1.weight.2"`), in the same order as [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, ValueId)>;

    /// Returns direct child modules. Leaf modules have none.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Fails with `ShapeMismatch` when `actual != expected`.
pub(crate) fn check_width(expected: usize, actual: usize, operation: &str) -> Result<(), GradError> {
    if expected != actual {
        return Err(GradError::ShapeMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        });
    }
    Ok(())
}
