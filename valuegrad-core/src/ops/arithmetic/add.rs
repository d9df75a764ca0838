// valuegrad-core/src/ops/arithmetic/add.rs

use crate::error::GradError;
use crate::graph::{Graph, Op, ValueId};
use crate::ops::operand_value;

// --- Forward Operation ---

/// Adds two nodes: `out = a + b`.
///
/// The local derivative is 1 with respect to each operand. Adding a node to
/// itself records the single operand `a` and routes `2·g` into it.
///
/// # Errors
/// `UnknownNode` if either operand is not a live node of `graph`.
pub fn add_op(graph: &mut Graph, a: ValueId, b: ValueId) -> Result<ValueId, GradError> {
    let a_val = operand_value(graph, a)?;
    let b_val = operand_value(graph, b)?;
    Ok(graph.push_op(a_val + b_val, Op::Add(a, b)))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
