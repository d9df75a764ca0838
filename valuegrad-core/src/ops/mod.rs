//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation of the engine lives here, grouped by kind.
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`, `tanh_op`, ...)
//!   taking the [`Graph`] and operand ids. It validates the operands, computes the
//!   forward value and records an [`Op`](crate::graph::Op) tag on the new node; the
//!   matching derivative rule lives in [`crate::autograd::backward_op`].
//! - **Graph methods:** `Graph::add`, `Graph::tanh`, ... forward to these functions.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, neg, pow (constant exponent), div.
//! - [`activation`]: tanh.
//! - [`math_elem`]: exp.
//! - [`reduction`]: left-to-right sums.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

use crate::error::GradError;
use crate::graph::{Graph, ValueId};

/// Ensures every operand is a live node of `graph` and returns its value.
pub(crate) fn operand_value(graph: &Graph, id: ValueId) -> Result<f64, GradError> {
    graph.value(id)
}
