// src/graph/accessors.rs
use super::{Graph, Node, Op, ValueId};
use crate::error::GradError;

impl Graph {
    /// Returns the number of nodes currently held.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks whether `id` refers to a live node of this graph.
    pub fn contains(&self, id: ValueId) -> bool {
        self.nodes
            .get(id.index)
            .map_or(false, |node| node.generation == id.generation)
    }

    /// Returns the node behind `id`.
    ///
    /// # Errors
    /// `UnknownNode` if `id` was never created here or was rewound away.
    pub fn node(&self, id: ValueId) -> Result<&Node, GradError> {
        self.nodes
            .get(id.index)
            .filter(|node| node.generation == id.generation)
            .ok_or(GradError::UnknownNode {
                id: id.index,
                len: self.nodes.len(),
            })
    }

    pub(crate) fn node_mut(&mut self, id: ValueId) -> Result<&mut Node, GradError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.index)
            .filter(|node| node.generation == id.generation)
            .ok_or(GradError::UnknownNode { id: id.index, len })
    }

    /// Returns the current value of a node.
    pub fn value(&self, id: ValueId) -> Result<f64, GradError> {
        Ok(self.node(id)?.value)
    }

    /// Returns the accumulated gradient of a node.
    pub fn grad(&self, id: ValueId) -> Result<f64, GradError> {
        Ok(self.node(id)?.grad)
    }

    /// Overwrites the value of a node. Used by optimizers on parameters.
    pub fn set_value(&mut self, id: ValueId, value: f64) -> Result<(), GradError> {
        self.node_mut(id)?.value = value;
        Ok(())
    }

    /// Overwrites the gradient slot of a node.
    pub fn set_grad(&mut self, id: ValueId, grad: f64) -> Result<(), GradError> {
        self.node_mut(id)?.grad = grad;
        Ok(())
    }

    /// Returns the operation that produced `id`.
    pub fn op(&self, id: ValueId) -> Result<Op, GradError> {
        Ok(self.node(id)?.op)
    }

    /// Returns the deduplicated operands of `id`.
    pub fn operands(&self, id: ValueId) -> Result<Vec<ValueId>, GradError> {
        Ok(self.node(id)?.op.operands())
    }

    pub fn label(&self, id: ValueId) -> Result<Option<&str>, GradError> {
        Ok(self.node(id)?.label())
    }

    pub fn set_label(&mut self, id: ValueId, label: &str) -> Result<(), GradError> {
        self.node_mut(id)?.label = Some(label.to_string());
        Ok(())
    }

    /// Reads the values of several nodes at once.
    pub fn values(&self, ids: &[ValueId]) -> Result<Vec<f64>, GradError> {
        ids.iter().map(|&id| self.value(id)).collect()
    }

    /// Renders a node the way it is printed when inspecting a graph: `Value(data = 0.5)`.
    pub fn display(&self, id: ValueId) -> Result<String, GradError> {
        Ok(format!("Value(data = {})", self.node(id)?.value))
    }
}
