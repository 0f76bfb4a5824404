//! Average rotation gap between appearances of the tracked song.

/// Assumed shows-between-appearances for a common rotation tune, used
/// whenever the history cannot support a real average.
pub const DEFAULT_GAP_SHOWS: f64 = 6.0;

/// Average number of shows strictly between consecutive occurrences.
///
/// `positions` are ascending indices into a most-recent-first history.
/// With fewer than two occurrences there is no gap to measure and the
/// default of 6 shows is returned. A degenerate average (non-finite or
/// zero, e.g. from back-to-back appearances only) also falls back to the
/// default so downstream arithmetic stays finite.
pub fn average_gap(positions: &[usize]) -> f64 {
    if positions.len() < 2 {
        return DEFAULT_GAP_SHOWS;
    }

    let gaps: Vec<f64> = positions
        .windows(2)
        .map(|pair| pair[1].saturating_sub(pair[0]).saturating_sub(1) as f64)
        .collect();
    let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;

    if mean.is_finite() && mean > 0.0 {
        mean
    } else {
        DEFAULT_GAP_SHOWS
    }
}
