//! Mapping a probability onto a concrete upcoming show.

use crate::phishnet::UpcomingShow;

/// Pick the upcoming show at which the song is expected next.
///
/// Uses a geometric-expectation heuristic: with per-show probability `p`
/// the song is due about `ceil(1/p) - 1` shows from now (0-based index
/// into the upcoming list). The index is clamped to the last known show
/// rather than extrapolating past the schedule. An empty schedule yields
/// no prediction.
pub fn project_next_occurrence(
    probability_percent: u8,
    upcoming: &[UpcomingShow],
) -> Option<&UpcomingShow> {
    if upcoming.is_empty() {
        return None;
    }
    let p = (probability_percent as f64 / 100.0).clamp(0.0001, 0.99);
    let expected = ((1.0 / p).ceil() as usize).saturating_sub(1);
    Some(&upcoming[expected.min(upcoming.len() - 1)])
}
