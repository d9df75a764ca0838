// src/nn/mod.rs
// Neural network building blocks composed from scalar graph nodes.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use layers::{Layer, Neuron};
pub use losses::{MseLoss, Reduction};
pub use module::Module;
