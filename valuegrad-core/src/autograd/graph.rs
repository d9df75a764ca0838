use crate::autograd::backward_op::{propagate, BackwardOp};
use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use log::{debug, trace};
use std::collections::HashSet;

/// Builds a topological sort of the graph reachable from `node`.
///
/// Operands are appended before their consumers and the `visited` guard makes
/// shared ancestors (diamonds) appear exactly once, after all of their operands.
/// Iterating `sorted_list` in reverse therefore visits every consumer before the
/// nodes it reads.
///
/// The depth-first walk keeps its own stack of `(node, expanded)` entries, so
/// arbitrarily deep chains (e.g. a loss summed over many examples) do not grow
/// the call stack. A node is pushed back as `expanded` before its operands and
/// emitted once they have all been emitted.
pub(crate) fn build_topo(
    graph: &Graph,
    node: ValueId,
    visited: &mut HashSet<ValueId>,
    sorted_list: &mut Vec<ValueId>,
) {
    let mut stack = vec![(node, false)];
    while let Some((current, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(current);
            continue;
        }
        if !visited.insert(current) {
            continue;
        }
        stack.push((current, true));
        // Reversed so operands are emitted in their recorded order.
        for input in graph.nodes[current.index].op.inputs().into_iter().rev() {
            if !visited.contains(&input) {
                stack.push((input, false));
            }
        }
    }
}

/// Returns the nodes reachable from `output`, operands first.
///
/// # Errors
/// `UnknownNode` if `output` is not a live node of `graph`.
pub fn topological_sort(graph: &Graph, output: ValueId) -> Result<Vec<ValueId>, GradError> {
    graph.node(output)?;
    let mut visited = HashSet::new();
    let mut sorted_list = Vec::new();
    build_topo(graph, output, &mut visited, &mut sorted_list);
    trace!("topological_sort: {} nodes reachable from {}", sorted_list.len(), output);
    Ok(sorted_list)
}

/// Performs the backward pass starting from `output`.
///
/// Seeds `grad(output) = 1.0` (overwriting), then runs every reachable node's
/// propagation rule in reverse topological order, output first and leaves last.
///
/// Gradients are *accumulated*: the result is exact only if every reachable node
/// had a zero gradient before the call. Zeroing is the caller's job
/// ([`Graph::zero_grad`], [`crate::optim::Optimizer::zero_grad`]); calling this twice
/// without a reset adds the second pass on top of the first.
///
/// # Errors
/// `UnknownNode` if `output` is not a live node of `graph`.
pub fn backward(graph: &mut Graph, output: ValueId) -> Result<(), GradError> {
    let sorted_nodes = topological_sort(graph, output)?;
    graph.set_grad(output, 1.0)?;
    for &node in sorted_nodes.iter().rev() {
        propagate(graph, node);
    }
    debug!("backward from {}: propagated through {} nodes", output, sorted_nodes.len());
    Ok(())
}
