use super::*;
use crate::nn::{Layer, Neuron};
use crate::train::reporter::FnReporter;
use approx::assert_relative_eq;

/// A single tanh neuron with one input, weight `w` and bias `b`.
fn single_neuron(graph: &mut Graph, w: f64, b: f64) -> Mlp {
    let neuron = Neuron::from_values(graph, &[w], b);
    let layer = Layer::from_neurons(vec![neuron]).unwrap();
    Mlp::from_layers(vec![layer]).unwrap()
}

#[test]
fn test_train_single_step_matches_hand_computation() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let net = single_neuron(&mut graph, 0.5, 0.0);
    let config = TrainConfig::new(1, 0.1);
    let mut history: Vec<EpochStats> = Vec::new();

    let stats = train(&mut graph, &net, &config, &[vec![1.0]], &[1.0], &mut history)?;

    let t = 0.5f64.tanh();
    assert_relative_eq!(stats[0].loss, (t - 1.0).powi(2), epsilon = 1e-12);
    // d loss / d w = 2 (t - 1)(1 - t²) x, with x = 1
    let grad_w = 2.0 * (t - 1.0) * (1.0 - t * t);
    let params = net.parameters();
    assert_relative_eq!(graph.value(params[0])?, 0.5 - 0.1 * grad_w, epsilon = 1e-12);
    assert_relative_eq!(graph.value(params[1])?, 0.0 - 0.1 * grad_w, epsilon = 1e-12);
    assert_eq!(history, stats, "reporter sees every epoch");
    Ok(())
}

#[test]
fn test_train_discards_ephemeral_nodes() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let net = single_neuron(&mut graph, -0.3, 0.2);
    let before = graph.len();
    let config = TrainConfig::default().with_epochs(5);
    let mut sink: Vec<EpochStats> = Vec::new();
    train(&mut graph, &net, &config, &[vec![1.0], vec![-1.0]], &[1.0, -1.0], &mut sink)?;
    assert_eq!(graph.len(), before);
    Ok(())
}

#[test]
fn test_train_epoch_numbering_and_decrease() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let net = single_neuron(&mut graph, 0.1, 0.0);
    let config = TrainConfig::new(10, 0.1);
    let mut epochs = Vec::new();
    let mut reporter = FnReporter(|s: &EpochStats| epochs.push(s.epoch));
    let stats = train(&mut graph, &net, &config, &[vec![2.0]], &[0.5], &mut reporter)?;
    drop(reporter);

    assert_eq!(epochs, (0..10).collect::<Vec<_>>());
    assert!(stats.iter().all(|s| s.total_epochs == 10));
    assert!(stats[9].is_last());
    assert!(stats[9].loss < stats[0].loss);
    Ok(())
}

#[test]
fn test_train_zero_epochs_is_a_no_op() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let net = single_neuron(&mut graph, 0.4, 0.1);
    let config = TrainConfig::new(0, 0.1);
    let stats = train(&mut graph, &net, &config, &[vec![1.0]], &[1.0], &mut Vec::<EpochStats>::new())?;
    assert!(stats.is_empty());
    assert_eq!(graph.value(net.parameters()[0])?, 0.4);
    Ok(())
}

#[test]
fn test_train_validation_errors_leave_parameters_untouched() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let net = single_neuron(&mut graph, 0.4, 0.1);
    let config = TrainConfig::default();
    let mut sink: Vec<EpochStats> = Vec::new();

    let err = train(&mut graph, &net, &config, &[], &[], &mut sink).unwrap_err();
    assert!(matches!(err, GradError::EmptyInput(_)));

    let err = train(&mut graph, &net, &config, &[vec![1.0]], &[1.0, 2.0], &mut sink).unwrap_err();
    assert!(matches!(err, GradError::ShapeMismatch { .. }));

    let err = train(&mut graph, &net, &config, &[vec![1.0, 2.0]], &[1.0], &mut sink).unwrap_err();
    assert!(matches!(err, GradError::ShapeMismatch { .. }));

    let bad_lr = config.with_learning_rate(0.0);
    let err = train(&mut graph, &net, &bad_lr, &[vec![1.0]], &[1.0], &mut sink).unwrap_err();
    assert!(matches!(err, GradError::InvalidConfig(_)));

    assert!(sink.is_empty());
    assert_eq!(graph.value(net.parameters()[0])?, 0.4);
    Ok(())
}

#[test]
fn test_train_requires_single_output() {
    let mut graph = Graph::new();
    let a = Neuron::from_values(&mut graph, &[1.0], 0.0);
    let b = Neuron::from_values(&mut graph, &[1.0], 0.0);
    let net = Mlp::from_layers(vec![Layer::from_neurons(vec![a, b]).unwrap()]).unwrap();
    let err = train(
        &mut graph,
        &net,
        &TrainConfig::default(),
        &[vec![1.0]],
        &[1.0],
        &mut Vec::<EpochStats>::new(),
    )
    .unwrap_err();
    assert!(matches!(err, GradError::ShapeMismatch { .. }));
}

#[test]
fn test_train_reports_over_channel() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let net = single_neuron(&mut graph, 0.2, 0.0);
    let (mut tx, rx) = std::sync::mpsc::channel::<EpochStats>();
    train(&mut graph, &net, &TrainConfig::new(3, 0.1), &[vec![1.0]], &[1.0], &mut tx)?;
    let received: Vec<EpochStats> = rx.try_iter().collect();
    assert_eq!(received.len(), 3);

    drop(rx);
    // a closed channel does not abort training
    let stats = train(&mut graph, &net, &TrainConfig::new(2, 0.1), &[vec![1.0]], &[1.0], &mut tx)?;
    assert_eq!(stats.len(), 2);
    Ok(())
}

#[test]
fn test_train_config_defaults() {
    let config = TrainConfig::default();
    assert_eq!(config.epochs, 20);
    assert_eq!(config.learning_rate, 0.1);
    assert!(config.validate().is_ok());
    assert!(TrainConfig::new(1, f64::INFINITY).validate().is_err());
}
