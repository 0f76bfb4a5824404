//! Bounded probability combining shows-since with the rotation gap.

use crate::phishnet::Show;
use crate::rotation::gap::{average_gap, DEFAULT_GAP_SHOWS};
use crate::rotation::matcher::occurrence_positions;

/// Conservative percentage reported when the song does not appear
/// anywhere in the supplied history window.
pub const BASELINE_PROBABILITY: u8 = 10;

/// Supporting figures behind a probability estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityResult {
    /// Whole-number percentage. In [1, 99] when the song was found,
    /// `BASELINE_PROBABILITY` otherwise.
    pub probability_percent: u8,
    /// Shows played since the most recent occurrence; `None` if the song
    /// was not found in the window.
    pub shows_since: Option<usize>,
    /// Index of the most recent occurrence in the history.
    pub last_occurrence: Option<usize>,
    /// Average rotation gap used by the formula.
    pub average_gap: f64,
}

/// Combine shows-since and the average gap into a whole-number
/// percentage.
///
/// The raw figure `shows_since * (100 / average_gap)` grows as the song
/// drifts past its usual rotation slot. It is clamped onto the [1%, 99%]
/// band and rounded, so a song played last night reports 1 and a long
/// overdue song saturates at 99. A degenerate gap is replaced with the
/// default so the result stays in bounds for any input.
pub fn probability_percent(shows_since: usize, average_gap: f64) -> u8 {
    let gap = if average_gap.is_finite() && average_gap > 0.0 {
        average_gap
    } else {
        DEFAULT_GAP_SHOWS
    };
    let raw = shows_since as f64 * (100.0 / gap);
    let fraction = (raw / 100.0).clamp(0.01, 0.99);
    (fraction * 100.0).round() as u8
}

/// Run the matcher, gap analyzer and combiner over a most-recent-first
/// history.
///
/// With no occurrence anywhere the formula is skipped entirely and the
/// baseline figures are returned.
pub fn compute_probability(history: &[Show], target: &str) -> ProbabilityResult {
    let positions = occurrence_positions(history, target);
    match positions.first() {
        None => ProbabilityResult {
            probability_percent: BASELINE_PROBABILITY,
            shows_since: None,
            last_occurrence: None,
            average_gap: DEFAULT_GAP_SHOWS,
        },
        Some(&most_recent) => {
            let gap = average_gap(&positions);
            ProbabilityResult {
                probability_percent: probability_percent(most_recent, gap),
                shows_since: Some(most_recent),
                last_occurrence: Some(most_recent),
                average_gap: gap,
            }
        }
    }
}
