use crate::error::GradError;
use crate::graph::{Graph, Op, ValueId};
use crate::ops::operand_value;

/// Natural exponential: `out = e^a`, with d(out)/da = out.
pub fn exp_op(graph: &mut Graph, a: ValueId) -> Result<ValueId, GradError> {
    let x = operand_value(graph, a)?;
    Ok(graph.push_op(x.exp(), Op::Exp(a)))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
