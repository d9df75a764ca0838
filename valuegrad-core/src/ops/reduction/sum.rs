use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use crate::ops::arithmetic::add_op;

/// Sums `terms` left to right onto `start`: `((start + t0) + t1) + ...`.
///
/// Returns `start` itself when `terms` is empty.
pub fn sum_from_op(graph: &mut Graph, start: ValueId, terms: &[ValueId]) -> Result<ValueId, GradError> {
    graph.node(start)?;
    let mut acc = start;
    for &term in terms {
        acc = add_op(graph, acc, term)?;
    }
    Ok(acc)
}

/// Sums `terms` starting from a lifted `0.0` leaf.
pub fn sum_op(graph: &mut Graph, terms: &[ValueId]) -> Result<ValueId, GradError> {
    for &term in terms {
        graph.node(term)?;
    }
    let zero = graph.lift(0.0);
    sum_from_op(graph, zero, terms)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
