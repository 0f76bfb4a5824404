//! Recency weighting from the song's frequency in the last few shows.

use crate::phishnet::Show;
use crate::rotation::matcher::is_occurrence;

/// Size of the recent window, counted from the most recent show.
pub const RECENT_WINDOW_SHOWS: usize = 10;

/// Linear boost factor derived from how often the song appeared in the
/// last `RECENT_WINDOW_SHOWS` shows (fewer if the history is shorter).
///
/// `factor = 0.8 + 0.4 * frequency * 2`, so it ranges from 0.8 (absent
/// from the window, or empty history) to 1.6 (played every night). The
/// figure is reported alongside the probability but does not currently
/// modulate it; see DESIGN.md.
pub fn recency_factor(history: &[Show], target: &str) -> f64 {
    let window = RECENT_WINDOW_SHOWS.min(history.len());
    let frequency = if window > 0 {
        let hits = history[..window]
            .iter()
            .filter(|show| is_occurrence(show, target))
            .count();
        hits as f64 / window as f64
    } else {
        0.0
    };
    0.8 + 0.4 * frequency * 2.0
}
