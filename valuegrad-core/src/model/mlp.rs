use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use crate::nn::module::{check_width, Module};
use crate::nn::Layer;
use crate::train::{self, EpochReporter, EpochStats, TrainConfig};
use rand::Rng;

/// Multi-layer perceptron: a chain of [`Layer`]s where every output of layer `i`
/// feeds every neuron of layer `i + 1`.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a randomly initialized network.
    ///
    /// # Arguments
    /// * `graph`: The graph that will own every weight and bias.
    /// * `nin`: Input width.
    /// * `layer_sizes`: Output width of each layer; the last entry is the network's output width.
    /// * `rng`: Random source for `Uniform(-1, 1)` initialization.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `nin` is zero, `layer_sizes` is empty or any width is zero.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        nin: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, GradError> {
        if nin == 0 {
            return Err(GradError::InvalidArchitecture(
                "input width must be at least 1".to_string(),
            ));
        }
        if layer_sizes.is_empty() {
            return Err(GradError::InvalidArchitecture(
                "a network needs at least one layer".to_string(),
            ));
        }
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut width = nin;
        for &nout in layer_sizes {
            layers.push(Layer::new(graph, width, nout, rng)?);
            width = nout;
        }
        Ok(Mlp { layers })
    }

    /// Assembles a network from existing layers, checking that widths chain.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, GradError> {
        if layers.is_empty() {
            return Err(GradError::InvalidArchitecture(
                "a network needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            check_width(pair[0].nout(), pair[1].nin(), "Mlp from_layers")?;
        }
        Ok(Mlp { layers })
    }

    pub fn nin(&self) -> usize {
        self.layers[0].nin()
    }

    pub fn nout(&self) -> usize {
        self.layers[self.layers.len() - 1].nout()
    }

    /// Input width followed by every layer's output width, e.g. `[3, 4, 4, 1]`.
    pub fn sizes(&self) -> Vec<usize> {
        std::iter::once(self.nin())
            .chain(self.layers.iter().map(|l| l.nout()))
            .collect()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Lifts raw numbers into the graph and runs the forward pass on them.
    ///
    /// # Errors
    /// `ShapeMismatch` if `input.len() != self.nin()`; nothing is lifted in that case.
    pub fn forward_values(&self, graph: &mut Graph, input: &[f64]) -> Result<Vec<ValueId>, GradError> {
        check_width(self.nin(), input.len(), "Mlp forward")?;
        let lifted = graph.lift_all(input);
        self.forward(graph, &lifted)
    }

    /// Runs the forward pass and returns the single output node.
    ///
    /// # Errors
    /// `ShapeMismatch` if the network does not have exactly one output.
    pub fn forward_scalar(&self, graph: &mut Graph, input: &[f64]) -> Result<ValueId, GradError> {
        check_width(1, self.nout(), "Mlp scalar output")?;
        Ok(self.forward_values(graph, input)?[0])
    }

    /// Evaluates the network on `input` and returns one value per output neuron.
    ///
    /// The nodes built for the evaluation are discarded before returning.
    pub fn predict(&self, graph: &mut Graph, input: &[f64]) -> Result<Vec<f64>, GradError> {
        let checkpoint = graph.checkpoint();
        let outputs = self
            .forward_values(graph, input)
            .and_then(|out| graph.values(&out));
        graph.rewind(checkpoint)?;
        outputs
    }

    /// Evaluates a single-output network and returns the bare scalar.
    pub fn predict_scalar(&self, graph: &mut Graph, input: &[f64]) -> Result<f64, GradError> {
        check_width(1, self.nout(), "Mlp scalar output")?;
        Ok(self.predict(graph, input)?[0])
    }

    /// Trains the network in place; see [`train::train`].
    pub fn train(
        &self,
        graph: &mut Graph,
        config: &TrainConfig,
        inputs: &[Vec<f64>],
        targets: &[f64],
        reporter: &mut dyn EpochReporter,
    ) -> Result<Vec<EpochStats>, GradError> {
        train::train(graph, self, config, inputs, targets, reporter)
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, input: &[ValueId]) -> Result<Vec<ValueId>, GradError> {
        check_width(self.nin(), input.len(), "Mlp forward")?;
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(graph, &x)?;
        }
        Ok(x)
    }

    /// Layer order, then neuron order, then weights before bias.
    fn parameters(&self) -> Vec<ValueId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, ValueId)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, id) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", i, name), id));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.iter().map(|l| l as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
