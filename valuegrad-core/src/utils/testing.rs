use rand::rngs::StdRng;
use rand::SeedableRng;

/// Checks that two slices of scalars are element-wise equal within `tolerance`.
/// Panics if lengths differ or any element differs by more than `tolerance`.
pub fn assert_vec_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Returns true if every window of `window` consecutive losses is non-increasing.
///
/// A `window` of 0 or 1 is trivially satisfied.
pub fn is_non_increasing_in_windows(losses: &[f64], window: usize) -> bool {
    if window < 2 {
        return true;
    }
    losses
        .windows(window)
        .all(|w| w.windows(2).all(|pair| pair[1] <= pair[0]))
}

/// Deterministic random source for reproducible initialization in tests and demos.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
