//! Rotation statistics for a single tracked song.
//!
//! Pure, synchronous and deterministic apart from the injected rng used
//! by the tonight figure. Histories are always most-recent-first; the
//! caller owns ordering.

mod gap;
mod matcher;
mod probability;
mod projection;
mod recency;
mod report;

pub use gap::{average_gap, DEFAULT_GAP_SHOWS};
pub use matcher::{is_occurrence, occurrence_positions};
pub use probability::{
    compute_probability, probability_percent, ProbabilityResult, BASELINE_PROBABILITY,
};
pub use projection::project_next_occurrence;
pub use recency::{recency_factor, RECENT_WINDOW_SHOWS};
pub use report::{
    baseline_report, performance_report, tonight_likelihood, BaselineReport, LastPerformance,
    StatsReport,
};
