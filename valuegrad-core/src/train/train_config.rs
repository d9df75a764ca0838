use crate::error::GradError;
use crate::optim::sgd::{validate_lr, DEFAULT_LEARNING_RATE};

/// Number of epochs used when none is configured.
pub const DEFAULT_EPOCHS: usize = 20;

/// Configuration for a [`train`](crate::train::train) run.
///
/// # Fields
/// - `epochs`: number of full passes over the training data; each pass performs exactly one update
/// - `learning_rate`: step size of the gradient-descent update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
        }
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Checks that the learning rate is finite and strictly positive.
    ///
    /// Zero epochs is a valid (empty) run.
    pub fn validate(&self) -> Result<(), GradError> {
        validate_lr(self.learning_rate)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE)
    }
}
