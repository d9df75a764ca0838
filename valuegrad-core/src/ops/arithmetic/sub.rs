// valuegrad-core/src/ops/arithmetic/sub.rs

use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use crate::ops::arithmetic::{add_op, neg_op};

/// Subtracts two nodes as `a + (-b)`. No dedicated derivative rule.
pub fn sub_op(graph: &mut Graph, a: ValueId, b: ValueId) -> Result<ValueId, GradError> {
    graph.node(a)?;
    let neg_b = neg_op(graph, b)?;
    add_op(graph, a, neg_b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
