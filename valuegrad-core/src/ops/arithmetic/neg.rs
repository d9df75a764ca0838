// valuegrad-core/src/ops/arithmetic/neg.rs

use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use crate::ops::arithmetic::mul_op;

/// Negates a node, expressed as a multiplication by a lifted `-1.0` leaf.
pub fn neg_op(graph: &mut Graph, a: ValueId) -> Result<ValueId, GradError> {
    graph.node(a)?;
    let minus_one = graph.lift(-1.0);
    mul_op(graph, a, minus_one)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
