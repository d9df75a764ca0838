use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use crate::nn::init;
use crate::nn::module::{check_width, Module};
use rand::Rng;

/// A single unit computing `tanh(bias + Σ weight_i · input_i)`.
///
/// Weights and bias are leaf nodes created once in the owning [`Graph`]; the
/// optimizer mutates their values in place and never replaces them.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<ValueId>,
    bias: ValueId,
}

impl Neuron {
    /// Creates a neuron with `nin` weights, drawing weights and bias from `Uniform(-1, 1)`.
    pub fn new<R: Rng + ?Sized>(graph: &mut Graph, nin: usize, rng: &mut R) -> Result<Self, GradError> {
        let weights = init::uniform_leaves(graph, rng, nin)?;
        let bias = init::uniform_leaves(graph, rng, 1)?[0];
        Ok(Neuron { weights, bias })
    }

    /// Creates a neuron with pinned weight and bias values.
    pub fn from_values(graph: &mut Graph, weights: &[f64], bias: f64) -> Self {
        let weights = graph.lift_all(weights);
        let bias = graph.leaf(bias);
        Neuron { weights, bias }
    }

    /// Number of inputs this neuron expects.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[ValueId] {
        &self.weights
    }

    pub fn bias(&self) -> ValueId {
        self.bias
    }

    /// Builds `tanh(bias + w0·x0 + w1·x1 + ...)`, summed left to right from the bias.
    ///
    /// # Errors
    /// `ShapeMismatch` if `input.len() != self.nin()`.
    pub fn activate(&self, graph: &mut Graph, input: &[ValueId]) -> Result<ValueId, GradError> {
        check_width(self.nin(), input.len(), "Neuron forward")?;
        let products = self
            .weights
            .iter()
            .zip(input)
            .map(|(&w, &x)| graph.mul(w, x))
            .collect::<Result<Vec<_>, _>>()?;
        let activation = graph.sum_from(self.bias, &products)?;
        graph.tanh(activation)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, input: &[ValueId]) -> Result<Vec<ValueId>, GradError> {
        Ok(vec![self.activate(graph, input)?])
    }

    /// Weights first, then the bias.
    fn parameters(&self) -> Vec<ValueId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, ValueId)> {
        let mut params: Vec<(String, ValueId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("weight.{}", i), w))
            .collect();
        params.push(("bias".to_string(), self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
