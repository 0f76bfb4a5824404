//! Assembly of the stats response bodies.
//!
//! Two terminal shapes exist: the baseline body when the song was not
//! found in the history window, and the full body with the last
//! performance, probability, tonight figure, projection and schedule.

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::phishnet::normalize::strip_html;
use crate::phishnet::{Show, UpcomingShow};
use crate::rotation::probability::{ProbabilityResult, BASELINE_PROBABILITY};
use crate::rotation::projection::project_next_occurrence;
use crate::rotation::recency::recency_factor;

/// The most recent show at which the song was played.
#[derive(Debug, Clone, Serialize)]
pub struct LastPerformance {
    pub date: String,
    pub venue: String,
    pub setlist: Option<String>,
}

/// Response body when the song was found in the history window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub last_performance: Option<LastPerformance>,
    pub shows_since_last_performance: Option<usize>,
    pub probability: u8,
    pub likely_hood: f64,
    pub next_expected_performance: Option<UpcomingShow>,
    pub upcoming_shows: Vec<UpcomingShow>,
}

/// Response body when the song was not found anywhere in the window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineReport {
    pub last_performance: Option<LastPerformance>,
    pub shows_since_last_performance: Option<usize>,
    pub probability: u8,
    pub note: String,
}

/// Baseline body: the song never appeared in the retrieved window, so
/// the rotation machinery is skipped and a conservative figure reported.
pub fn baseline_report(target: &str) -> BaselineReport {
    BaselineReport {
        last_performance: None,
        shows_since_last_performance: None,
        probability: BASELINE_PROBABILITY,
        note: format!(
            "{} not found in the latest setlists window. Probability uses a conservative baseline.",
            target
        ),
    }
}

/// Likelihood of hearing the song tonight, as a percentage.
///
/// With a show on the calendar today this is just the rotation
/// probability. With no show tonight the song can only turn up at a
/// surprise appearance, so a token figure is drawn from the injected rng
/// on [0.000001, 0.1) and reported with two decimals, floored at 0.01%.
pub fn tonight_likelihood<R: Rng>(probability_percent: u8, has_show_today: bool, rng: &mut R) -> f64 {
    if has_show_today {
        return probability_percent as f64;
    }
    let fraction: f64 = rng.random_range(0.000001..0.1);
    ((fraction * 10000.0).round() / 100.0).max(0.01)
}

/// Full body for a song that was found in the window.
///
/// `result` must come from `compute_probability` over the same history;
/// `upcoming` is ascending by date. `today` and `rng` are injected so
/// the tonight figure is testable.
pub fn performance_report<R: Rng>(
    history: &[Show],
    result: &ProbabilityResult,
    upcoming: Vec<UpcomingShow>,
    target: &str,
    today: NaiveDate,
    rng: &mut R,
) -> StatsReport {
    let factor = recency_factor(history, target);
    debug!(
        "rotation figures for {}: shows_since={:?} average_gap={:.2} recency_factor={:.2}",
        target, result.shows_since, result.average_gap, factor
    );

    let last_performance = result
        .last_occurrence
        .and_then(|idx| history.get(idx))
        .map(|show| LastPerformance {
            date: show.date.clone(),
            venue: strip_html(&show.venue),
            setlist: show.setlist.clone(),
        });

    let today_iso = today.format("%Y-%m-%d").to_string();
    let has_show_today = upcoming.iter().any(|show| show.date == today_iso);
    let likely_hood = tonight_likelihood(result.probability_percent, has_show_today, rng);

    let next_expected_performance =
        project_next_occurrence(result.probability_percent, &upcoming).cloned();

    StatsReport {
        last_performance,
        shows_since_last_performance: result.shows_since,
        probability: result.probability_percent,
        likely_hood,
        next_expected_performance,
        upcoming_shows: upcoming,
    }
}
