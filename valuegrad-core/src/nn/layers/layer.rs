use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use crate::nn::layers::Neuron;
use crate::nn::module::{check_width, Module};
use rand::Rng;

/// A fully connected layer: every neuron reads the same input vector.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    /// Creates `nout` randomly initialized neurons of `nin` inputs each.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `nout == 0`.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        nin: usize,
        nout: usize,
        rng: &mut R,
    ) -> Result<Self, GradError> {
        if nout == 0 {
            return Err(GradError::InvalidArchitecture(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::new(graph, nin, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, nin })
    }

    /// Builds a layer from existing neurons, which must all share one input width.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, GradError> {
        let nin = match neurons.first() {
            Some(first) => first.nin(),
            None => {
                return Err(GradError::InvalidArchitecture(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        for neuron in &neurons {
            check_width(nin, neuron.nin(), "Layer from_neurons")?;
        }
        Ok(Layer { neurons, nin })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// Always returns one output per neuron, even for a single-neuron layer.
    fn forward(&self, graph: &mut Graph, input: &[ValueId]) -> Result<Vec<ValueId>, GradError> {
        check_width(self.nin, input.len(), "Layer forward")?;
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, input))
            .collect()
    }

    fn parameters(&self) -> Vec<ValueId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, ValueId)> {
        let mut params = Vec::new();
        for (j, neuron) in self.neurons.iter().enumerate() {
            for (name, id) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", j, name), id));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons.iter().map(|n| n as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
