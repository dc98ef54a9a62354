//! Convergence test between successive rank estimates

/// Largest per-page absolute change between two estimates in the same page order
pub fn max_delta(previous: &[f64], next: &[f64]) -> f64 {
    previous
        .iter()
        .zip(next)
        .map(|(old, new)| (old - new).abs())
        .fold(0.0, f64::max)
}

/// True when both estimates cover the same pages and no page moved by more
/// than `epsilon`. Any NaN counts as not converged.
pub fn has_converged(previous: &[f64], next: &[f64], epsilon: f64) -> bool {
    previous.len() == next.len()
        && previous
            .iter()
            .zip(next)
            .all(|(old, new)| (old - new).abs() <= epsilon)
}
