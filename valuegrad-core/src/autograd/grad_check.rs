use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Invalid epsilon {0}: must be finite and positive")]
    InvalidEpsilon(f64),
    #[error("Graph error during gradient check: {0}")]
    Graph(#[from] GradError),
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` builds a scalar function of the lifted `inputs` on the graph it is given
/// and returns the output node. It is evaluated once on a fresh graph to obtain the
/// analytical gradients through `backward()`, then twice per input with the input
/// shifted by `±epsilon`.
///
/// A gradient passes when the two estimates agree within `tolerance`, either in
/// absolute terms or relative to the larger magnitude.
///
/// # Returns
/// The analytical gradients, one per input, when every check passes.
///
/// # Errors
/// The first mismatch or non-finite gradient encountered, or any graph error raised
/// by `func`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&mut Graph, &[ValueId]) -> Result<ValueId, GradError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- Analytical pass ---
    let mut graph = Graph::new();
    let leaves = graph.lift_all(inputs);
    let output = func(&mut graph, &leaves)?;
    graph.backward(output)?;
    let analytical: Vec<f64> = leaves
        .iter()
        .map(|&id| graph.grad(id))
        .collect::<Result<_, _>>()?;

    // --- Numerical pass, one input at a time ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = evaluate_shifted(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate_shifted(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(analytical)
}

/// Evaluates `func` on a fresh graph with input `index` shifted by `delta`.
fn evaluate_shifted<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph, &[ValueId]) -> Result<ValueId, GradError>,
{
    let mut shifted = inputs.to_vec();
    shifted[index] += delta;
    let mut graph = Graph::new();
    let leaves = graph.lift_all(&shifted);
    let output = func(&mut graph, &leaves)?;
    Ok(graph.value(output)?)
}

// --- Tests ---
#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
