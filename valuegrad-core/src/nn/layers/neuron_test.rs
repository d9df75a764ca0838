use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_identity_neuron_outputs_tanh_zero() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let neuron = Neuron::from_values(&mut graph, &[1.0], 0.0);
    let x = graph.lift_all(&[0.0]);
    let out = neuron.activate(&mut graph, &x)?;
    assert_eq!(graph.value(out)?, 0.0);
    Ok(())
}

#[test]
fn test_neuron_forward_value_and_gradients() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let neuron = Neuron::from_values(&mut graph, &[0.5, -1.0], 0.25);
    let x = graph.lift_all(&[2.0, 0.5]);
    let out = neuron.activate(&mut graph, &x)?;

    let pre: f64 = 0.25 + 0.5 * 2.0 + -1.0 * 0.5;
    assert_relative_eq!(graph.value(out)?, pre.tanh(), epsilon = 1e-12);

    graph.backward(out)?;
    let d = 1.0 - pre.tanh().powi(2);
    assert_relative_eq!(graph.grad(neuron.bias())?, d, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(neuron.weights()[0])?, 2.0 * d, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(neuron.weights()[1])?, 0.5 * d, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(x[0])?, 0.5 * d, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_arity_mismatch() {
    let mut graph = Graph::new();
    let neuron = Neuron::from_values(&mut graph, &[1.0, 2.0, 3.0], 0.0);
    let x = graph.lift_all(&[1.0, 2.0]);
    let before = graph.len();
    let err = neuron.activate(&mut graph, &x).unwrap_err();
    assert_eq!(
        err,
        GradError::ShapeMismatch {
            expected: 3,
            actual: 2,
            operation: "Neuron forward".to_string()
        }
    );
    assert_eq!(graph.len(), before, "no partial graph on failure");
}

#[test]
fn test_neuron_parameters_order() {
    let mut graph = Graph::new();
    let neuron = Neuron::from_values(&mut graph, &[0.1, 0.2], 0.3);
    let params = neuron.parameters();
    assert_eq!(params.len(), 3);
    assert_eq!(&params[..2], neuron.weights());
    assert_eq!(params[2], neuron.bias());

    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["weight.0", "weight.1", "bias"]);
}

#[test]
fn test_random_neuron_is_seed_reproducible() -> Result<(), GradError> {
    let mut g1 = Graph::new();
    let n1 = Neuron::new(&mut g1, 4, &mut StdRng::seed_from_u64(3))?;
    let mut g2 = Graph::new();
    let n2 = Neuron::new(&mut g2, 4, &mut StdRng::seed_from_u64(3))?;
    assert_eq!(g1.values(&n1.parameters())?, g2.values(&n2.parameters())?);
    for v in g1.values(&n1.parameters())? {
        assert!((-1.0..1.0).contains(&v));
    }
    Ok(())
}
