// valuegrad-core/src/ops/arithmetic/div.rs

use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use crate::ops::arithmetic::{mul_op, pow_op};

/// Divides two nodes as `a * b^-1`. No dedicated derivative rule.
///
/// A zero-valued divisor is not an error: the result follows IEEE-754 (±inf or NaN)
/// and so do the gradients.
pub fn div_op(graph: &mut Graph, a: ValueId, b: ValueId) -> Result<ValueId, GradError> {
    graph.node(a)?;
    let reciprocal = pow_op(graph, b, -1.0)?;
    mul_op(graph, a, reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
