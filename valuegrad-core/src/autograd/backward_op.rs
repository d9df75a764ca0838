// Local derivative rules, dispatched on the operation tag of each node.

use crate::graph::{Graph, Op, ValueId};

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Every non-leaf node records an [`Op`]; during `backward()` the scheduler asks the
/// op for the contribution each operand receives, given the value and the
/// accumulated gradient of the node the op produced.
pub trait BackwardOp {
    /// Computes `(operand, d_out/d_operand * out_grad)` pairs.
    ///
    /// One entry is produced per operand *position*, so an op that consumes the same
    /// node twice (e.g. `Mul(a, a)`) yields two entries for `a`; both are added into
    /// the same gradient slot, which gives the correct `2·a·g`.
    ///
    /// # Arguments
    /// * `graph`: The graph holding operand values (read only).
    /// * `out_value`: Value of the node produced by this op.
    /// * `out_grad`: Accumulated gradient of that node.
    fn backward(&self, graph: &Graph, out_value: f64, out_grad: f64) -> Vec<(ValueId, f64)>;

    /// Returns the deduplicated operand ids used to traverse the graph.
    fn inputs(&self) -> Vec<ValueId>;
}

impl BackwardOp for Op {
    fn backward(&self, graph: &Graph, out_value: f64, out_grad: f64) -> Vec<(ValueId, f64)> {
        // Operands always sit below their consumer, so a live node's operands are live.
        let value_of = |id: ValueId| graph.nodes[id.index].value;
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) => vec![(a, out_grad), (b, out_grad)],
            Op::Mul(a, b) => vec![(a, value_of(b) * out_grad), (b, value_of(a) * out_grad)],
            Op::Pow(a, exponent) => {
                let local = exponent * value_of(a).powf(exponent - 1.0);
                vec![(a, local * out_grad)]
            }
            Op::Tanh(a) => vec![(a, (1.0 - out_value * out_value) * out_grad)],
            Op::Exp(a) => vec![(a, out_value * out_grad)],
        }
    }

    fn inputs(&self) -> Vec<ValueId> {
        self.operands()
    }
}

/// Runs the propagation rule of a single node: reads its gradient and adds the
/// scaled contributions into its operands' gradients.
pub(crate) fn propagate(graph: &mut Graph, id: ValueId) {
    let node = &graph.nodes[id.index];
    let contributions = node.op.backward(graph, node.value, node.grad);
    for (operand, delta) in contributions {
        graph.nodes[operand.index].grad += delta;
    }
}
