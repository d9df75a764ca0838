// valuegrad-core/src/ops/arithmetic/mul.rs

use crate::error::GradError;
use crate::graph::{Graph, Op, ValueId};
use crate::ops::operand_value;

/// Multiplies two nodes: `out = a * b`.
///
/// d(out)/da = b, d(out)/db = a. Squaring through `mul_op(g, a, a)` is recorded
/// with the single operand `a` and yields `2·a·g` on backward.
///
/// # Errors
/// `UnknownNode` if either operand is not a live node of `graph`.
pub fn mul_op(graph: &mut Graph, a: ValueId, b: ValueId) -> Result<ValueId, GradError> {
    let a_val = operand_value(graph, a)?;
    let b_val = operand_value(graph, b)?;
    Ok(graph.push_op(a_val * b_val, Op::Mul(a, b)))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
