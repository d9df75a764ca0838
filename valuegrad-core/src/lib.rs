//! Scalar reverse-mode automatic differentiation and a small multi-layer perceptron
//! built on top of it.
//!
//! Every scalar lives as a node in a [`Graph`] arena and is addressed by a
//! [`ValueId`]. Operations append nodes; [`Graph::backward`] accumulates gradients
//! into every ancestor of an output node.

pub mod autograd;
pub mod error;
pub mod graph;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod train;
pub mod utils;

// Re-export the types most programs need at the crate root.
pub use error::GradError;
pub use graph::{Checkpoint, Graph, Node, Op, ValueId};
pub use model::Mlp;
pub use nn::module::Module;
pub use train::{train, EpochReporter, EpochStats, LogReporter, TrainConfig};
