// src/graph/node.rs
use super::ValueId;

/// The operation that produced a node, together with its operand ids.
///
/// Propagation rules are not stored per node: the backward pass dispatches on
/// this tag (see [`crate::autograd::BackwardOp`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input, parameter or lifted constant. No operands.
    Leaf,
    Add(ValueId, ValueId),
    Mul(ValueId, ValueId),
    /// Power by a constant real exponent.
    Pow(ValueId, f64),
    Tanh(ValueId),
    Exp(ValueId),
}

impl Op {
    /// Returns the operands of this operation, deduplicated by id.
    ///
    /// `Mul(a, a)` reports the single operand `a`.
    pub fn operands(&self) -> Vec<ValueId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => {
                if a == b {
                    vec![a]
                } else {
                    vec![a, b]
                }
            }
            Op::Pow(a, _) | Op::Tanh(a) | Op::Exp(a) => vec![a],
        }
    }

    /// Human-readable label of the producing operation. Diagnostic only.
    pub fn tag(&self) -> String {
        match self {
            Op::Leaf => String::new(),
            Op::Add(..) => "+".to_string(),
            Op::Mul(..) => "*".to_string(),
            Op::Pow(_, exponent) => format!("**{}", exponent),
            Op::Tanh(_) => "tanh".to_string(),
            Op::Exp(_) => "exp".to_string(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }
}

/// Storage for a single scalar node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Current scalar value. Only leaves are ever mutated after creation (by the optimizer).
    pub(crate) value: f64,
    /// Accumulated d(output)/d(this node). Starts at 0.0.
    pub(crate) grad: f64,
    pub(crate) op: Op,
    /// Optional name used when inspecting a graph.
    pub(crate) label: Option<String>,
    pub(crate) generation: u32,
}

impl Node {
    pub(crate) fn new(value: f64, op: Op, generation: u32) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            label: None,
            generation,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
