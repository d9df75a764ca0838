// valuegrad-core/src/optim/mod.rs

//! Optimizers for training networks built on the scalar graph.
//!
//! This module provides the `Optimizer` trait and plain gradient descent (`Sgd`).

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::{Sgd, DEFAULT_LEARNING_RATE};
