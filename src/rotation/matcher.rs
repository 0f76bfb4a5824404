//! Setlist text matching for the tracked song.

use crate::phishnet::Show;

/// Returns true iff the show's setlist text contains `target` as a
/// case-insensitive substring. A missing setlist never matches.
pub fn is_occurrence(show: &Show, target: &str) -> bool {
    match &show.setlist {
        Some(text) => text.to_lowercase().contains(&target.to_lowercase()),
        None => false,
    }
}

/// Indices into `history` (most-recent-first) at which the tracked song
/// appears, in ascending order.
pub fn occurrence_positions(history: &[Show], target: &str) -> Vec<usize> {
    let needle = target.to_lowercase();
    history
        .iter()
        .enumerate()
        .filter(|(_, show)| {
            show.setlist
                .as_deref()
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .map(|(idx, _)| idx)
        .collect()
}
