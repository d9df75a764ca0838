use thiserror::Error;

/// Custom error type for the valuegrad engine.
///
/// Numerical edge cases (division by a zero-valued node, overflow in `exp`/`tanh`)
/// are *not* errors: they flow through as IEEE-754 infinities and NaNs.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid exponent {0}: power requires a finite constant exponent")]
    InvalidExponent(f64),

    #[error("Unknown node {id}: graph only holds {len} nodes")]
    UnknownNode { id: usize, len: usize },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Empty input for operation {0}")]
    EmptyInput(String),
}
