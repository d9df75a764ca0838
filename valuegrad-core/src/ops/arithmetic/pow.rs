// valuegrad-core/src/ops/arithmetic/pow.rs

use crate::error::GradError;
use crate::graph::{Graph, Op, ValueId};
use crate::ops::operand_value;

/// Raises a node to a constant real exponent: `out = a^n`.
///
/// The exponent is a plain number, never a node: differentiating through a
/// variable exponent is not supported. d(out)/da = n·a^(n-1).
///
/// # Errors
/// * `InvalidExponent` if `exponent` is NaN or infinite.
/// * `UnknownNode` if `a` is not a live node of `graph`.
pub fn pow_op(graph: &mut Graph, a: ValueId, exponent: f64) -> Result<ValueId, GradError> {
    if !exponent.is_finite() {
        return Err(GradError::InvalidExponent(exponent));
    }
    let a_val = operand_value(graph, a)?;
    Ok(graph.push_op(a_val.powf(exponent), Op::Pow(a, exponent)))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
