use valuegrad_core::utils::testing::{assert_vec_near, is_non_increasing_in_windows, seeded_rng};
use valuegrad_core::{EpochStats, Graph, GradError, LogReporter, Mlp, Module, TrainConfig};

mod common;
use common::{pinned_mlp, toy_inputs, toy_targets};

// Per-epoch losses of the pinned [3, 4, 4, 1] network on the toy problem.
const PINNED_LOSSES: [f64; 20] = [
    6.601429350437185,
    3.32432542131834,
    2.1986729041447273,
    1.3280946129676958,
    0.5410950072670934,
    0.22532583597532324,
    0.11812966308596512,
    0.07812505441291573,
    0.05853504423977343,
    0.046500275928286816,
    0.038414574051158695,
    0.032637564019770575,
    0.028318955302825834,
    0.02497658627719327,
    0.022317838980730677,
    0.020155390453016914,
    0.01836404051546315,
    0.016857080726816465,
    0.015572642220190148,
    0.014465445131828762,
];

const PINNED_PREDICTIONS: [f64; 4] = [
    0.9731573745073181,
    -0.9492427772629629,
    -0.9360831238314613,
    0.921773220247775,
];

#[test]
fn test_pinned_network_loss_trajectory() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let mlp = pinned_mlp(&mut graph, 3, &[4, 4, 1]);
    assert_eq!(mlp.num_parameters(), 41);

    let mut history: Vec<EpochStats> = Vec::new();
    let stats = mlp.train(
        &mut graph,
        &TrainConfig::default(),
        &toy_inputs(),
        &toy_targets(),
        &mut history,
    )?;

    let losses: Vec<f64> = stats.iter().map(|s| s.loss).collect();
    assert_vec_near(&losses, &PINNED_LOSSES, 1e-9);
    assert!(is_non_increasing_in_windows(&losses, losses.len()));

    let predictions = toy_inputs()
        .iter()
        .map(|x| mlp.predict_scalar(&mut graph, x))
        .collect::<Result<Vec<_>, _>>()?;
    assert_vec_near(&predictions, &PINNED_PREDICTIONS, 1e-9);

    let params = mlp.parameters();
    assert_vec_near(
        &[graph.value(params[0])?, graph.value(params[40])?],
        &[-0.7673155463542511, -0.2804459085877818],
        1e-9,
    );
    assert_eq!(graph.len(), 41, "only parameters survive training");
    Ok(())
}

#[test]
fn test_seeded_network_learns_toy_problem() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let mut rng = seeded_rng(1337);
    let mlp = Mlp::new(&mut graph, 3, &[4, 4, 1], &mut rng)?;

    let config = TrainConfig::default().with_epochs(100);
    let stats = mlp.train(&mut graph, &config, &toy_inputs(), &toy_targets(), &mut LogReporter)?;

    assert_eq!(stats.len(), 100);
    let first = stats[0].loss;
    let last = stats[99].loss;
    assert!(last.is_finite());
    assert!(last < first, "loss went from {} to {}", first, last);
    Ok(())
}

#[test]
fn test_training_resumes_from_updated_parameters() -> Result<(), GradError> {
    // Two runs of 10 epochs continue exactly where one run of 20 would be.
    let mut graph = Graph::new();
    let mlp = pinned_mlp(&mut graph, 3, &[4, 4, 1]);
    let config = TrainConfig::default().with_epochs(10);
    let mut sink: Vec<EpochStats> = Vec::new();

    mlp.train(&mut graph, &config, &toy_inputs(), &toy_targets(), &mut sink)?;
    let second = mlp.train(&mut graph, &config, &toy_inputs(), &toy_targets(), &mut sink)?;

    assert_eq!(second[0].epoch, 0);
    assert_vec_near(&[second[0].loss, second[9].loss], &[PINNED_LOSSES[10], PINNED_LOSSES[19]], 1e-9);
    assert_eq!(sink.len(), 20);
    Ok(())
}
