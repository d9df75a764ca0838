//! Reverse-mode automatic differentiation over the scalar [`Graph`](crate::graph::Graph).
//!
//! - [`backward_op`]: local derivative rules, dispatched on each node's [`Op`](crate::graph::Op).
//! - [`graph`]: topological sort and the backward scheduler.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{backward, topological_sort};

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
