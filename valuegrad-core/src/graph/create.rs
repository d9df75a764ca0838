// src/graph/create.rs
use super::{Graph, Node, Op, ValueId};
use crate::error::GradError;
use log::debug;

/// Arena length captured by [`Graph::checkpoint`].
///
/// Every node whose id is below the checkpoint survives a [`Graph::rewind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(pub(crate) usize);

impl Checkpoint {
    /// Number of nodes that existed when the checkpoint was taken.
    pub fn len(&self) -> usize {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Graph {
    /// Creates a leaf node (input, parameter or constant) holding `value`.
    pub fn leaf(&mut self, value: f64) -> ValueId {
        self.push(value, Op::Leaf)
    }

    /// Creates a labelled leaf node.
    pub fn leaf_labeled(&mut self, value: f64, label: &str) -> ValueId {
        let id = self.leaf(value);
        self.nodes[id.index].label = Some(label.to_string());
        id
    }

    /// Lifts a plain number into the graph as a fresh leaf node.
    ///
    /// This is the explicit conversion used wherever a number is combined with a
    /// node, in either operand order: `let two = g.lift(2.0); g.mul(two, x)`.
    pub fn lift(&mut self, value: f64) -> ValueId {
        self.leaf(value)
    }

    /// Lifts every number of `values`, preserving order.
    pub fn lift_all(&mut self, values: &[f64]) -> Vec<ValueId> {
        values.iter().map(|&v| self.lift(v)).collect()
    }

    /// Appends an operation node. Operands must already be validated.
    pub(crate) fn push_op(&mut self, value: f64, op: Op) -> ValueId {
        self.push(value, op)
    }

    fn push(&mut self, value: f64, op: Op) -> ValueId {
        let id = ValueId {
            index: self.nodes.len(),
            generation: self.generation,
        };
        self.nodes.push(Node::new(value, op, self.generation));
        id
    }

    /// Captures the current arena length.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.nodes.len())
    }

    /// Discards every node created after `checkpoint`.
    ///
    /// Ids of the discarded nodes become unknown; later use yields
    /// [`GradError::UnknownNode`], even once their slots are reused by new nodes.
    /// Ids below the checkpoint stay valid.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the checkpoint lies beyond the current arena
    /// (for example a checkpoint taken on a bigger graph).
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<(), GradError> {
        if checkpoint.0 > self.nodes.len() {
            return Err(GradError::InvalidConfig(format!(
                "cannot rewind a graph of {} nodes to checkpoint {}",
                self.nodes.len(),
                checkpoint.0
            )));
        }
        let dropped = self.nodes.len() - checkpoint.0;
        if dropped > 0 {
            self.nodes.truncate(checkpoint.0);
            self.generation = self.generation.wrapping_add(1);
        }
        debug!("rewind: dropped {} ephemeral nodes, {} kept", dropped, checkpoint.0);
        Ok(())
    }
}
