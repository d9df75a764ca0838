// src/graph/mod.rs

use std::fmt;

// --- Implementation modules ---
mod accessors;
mod autograd_methods;
pub mod create;
pub mod node;
mod op_methods;

pub use create::Checkpoint;
pub use node::{Node, Op};

/// Identity of a scalar node inside a [`Graph`].
///
/// Identity is positional, never structural: two nodes holding the same numeric
/// value are distinct graph entities with distinct ids.
///
/// An id also records the rewind generation its node was created in. A slot freed by
/// [`Graph::rewind`] and filled again belongs to a newer generation, so ids of the
/// discarded node keep failing with `UnknownNode` instead of reading the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl ValueId {
    /// Returns the arena slot of this node.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Arena holding every scalar node of a dynamic computation graph.
///
/// A node can only be built from operands that already exist in the arena, so
/// operands always sit at lower indices than their consumers and the operand
/// relation is acyclic by construction.
///
/// Long-lived nodes (weights, biases) are created first; each training step takes
/// a [`Checkpoint`], builds its ephemeral sums/products/activations on top of it
/// and [`Graph::rewind`]s afterwards, so only parameter values carry over.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    /// Bumped by every rewind that discards nodes; stamped on each new node.
    pub(crate) generation: u32,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            generation: 0,
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
            generation: 0,
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
