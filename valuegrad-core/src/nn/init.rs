use crate::error::GradError;
use crate::graph::{Graph, ValueId};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Lower bound used for weights and biases.
pub const DEFAULT_LOW: f64 = -1.0;
/// Upper bound used for weights and biases.
pub const DEFAULT_HIGH: f64 = 1.0;

/// Draws `n` samples from `Uniform(low, high)` using the given random source.
///
/// Randomness is always injected: seed the source (e.g. `StdRng::seed_from_u64`)
/// to make a network reproducible.
///
/// # Errors
/// `InvalidConfig` if the bounds are not finite or `low >= high`.
pub fn uniform<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    low: f64,
    high: f64,
) -> Result<Vec<f64>, GradError> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(GradError::InvalidConfig(format!(
            "uniform init requires finite bounds with low < high, got [{}, {})",
            low, high
        )));
    }
    let dist = Uniform::new(low, high);
    Ok((0..n).map(|_| dist.sample(rng)).collect())
}

/// Creates `n` parameter leaves drawn from `Uniform(-1, 1)`.
pub fn uniform_leaves<R: Rng + ?Sized>(
    graph: &mut Graph,
    rng: &mut R,
    n: usize,
) -> Result<Vec<ValueId>, GradError> {
    let values = uniform(rng, n, DEFAULT_LOW, DEFAULT_HIGH)?;
    Ok(graph.lift_all(&values))
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
