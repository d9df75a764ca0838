use rand::Rng;
use valuegrad_core::nn::{Layer, Neuron};
use valuegrad_core::{Graph, Mlp};

/// The four 3-vectors of the classic toy problem.
#[allow(dead_code)]
pub fn toy_inputs() -> Vec<Vec<f64>> {
    vec![
        vec![-2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ]
}

#[allow(dead_code)]
pub fn toy_targets() -> Vec<f64> {
    vec![1.0, -1.0, -1.0, 1.0]
}

/// Deterministic parameter values in [-1, 1), indexed in parameter order.
#[allow(dead_code)]
pub fn pinned_value(k: usize) -> f64 {
    ((k * 37 + 11) % 200) as f64 / 100.0 - 1.0
}

/// Builds a network of the given shape whose parameters, in `parameters()` order,
/// take the values `pinned_value(0), pinned_value(1), ...`.
#[allow(dead_code)]
pub fn pinned_mlp(graph: &mut Graph, nin: usize, layer_sizes: &[usize]) -> Mlp {
    let mut k = 0;
    let mut layers = Vec::new();
    let mut width = nin;
    for &nout in layer_sizes {
        let mut neurons = Vec::new();
        for _ in 0..nout {
            let weights: Vec<f64> = (k..k + width).map(pinned_value).collect();
            let bias = pinned_value(k + width);
            k += width + 1;
            neurons.push(Neuron::from_values(graph, &weights, bias));
        }
        layers.push(Layer::from_neurons(neurons).expect("non-empty layer"));
        width = nout;
    }
    Mlp::from_layers(layers).expect("chained layers")
}

/// Random points in [-1, 1).
#[allow(dead_code)]
pub fn random_inputs<R: Rng>(rng: &mut R, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}
