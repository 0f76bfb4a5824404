//! Boundary adapter between upstream payload variation and the
//! normalized show models.

use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use super::models::{RawSetlist, RawUpcomingShow, Show, UpcomingShow};

/// Numeric artist id the upstream uses for the tracked band's own shows.
const PRIMARY_ARTIST_ID: i64 = 1;

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid markup pattern"))
}

/// Strip markup tags (e.g. a venue anchor) down to plain trimmed text.
pub fn strip_html(text: &str) -> String {
    tag_pattern().replace_all(text, "").trim().to_string()
}

/// Parse a display date in either ISO `YYYY-MM-DD` or `MM/DD/YYYY` form.
pub fn parse_show_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
        .ok()
}

/// ISO date string from the API's two date spellings. `showdate` is
/// already ISO when present; `short_date` is `MM/DD/YYYY`.
fn iso_date(showdate: Option<&str>, short_date: Option<&str>) -> Option<String> {
    if let Some(iso) = showdate {
        return Some(iso.to_string());
    }
    let parts: Vec<&str> = short_date?.split('/').collect();
    if parts.len() == 3 {
        return Some(format!("{}-{:0>2}-{:0>2}", parts[2], parts[0], parts[1]));
    }
    None
}

fn value_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_tracked_artist(raw: &RawUpcomingShow, artist: &str) -> bool {
    if let Some(id) = raw.artistid.as_ref().and_then(Value::as_i64) {
        if id == PRIMARY_ARTIST_ID {
            return true;
        }
    }
    let needle = artist.to_lowercase();
    [
        raw.artist.as_deref(),
        raw.artist_name.as_deref(),
        raw.band.as_deref(),
        raw.artist_slug.as_deref(),
        raw.artistid.as_ref().and_then(Value::as_str),
        raw.gid.as_deref(),
        raw.group.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Normalize one page of the setlists feed into display-ready shows,
/// preserving the feed's most-recent-first order.
pub fn normalize_setlists(raw: Vec<RawSetlist>) -> Vec<Show> {
    raw.into_iter()
        .map(|entry| Show {
            date: entry.short_date.or(entry.showdate).unwrap_or_default(),
            venue: entry.venue.unwrap_or_default(),
            setlist: entry.setlistdata,
        })
        .collect()
}

/// Normalize the upcoming-shows feed: keep only the tracked artist,
/// require a usable date, strip venue markup, synthesize missing ids,
/// deduplicate by id and sort ascending by date.
pub fn normalize_upcoming(raw: Vec<RawUpcomingShow>, artist: &str) -> Vec<UpcomingShow> {
    let mut shows: Vec<UpcomingShow> = raw
        .into_iter()
        .filter(|entry| is_tracked_artist(entry, artist))
        .filter_map(|entry| {
            let date = iso_date(entry.showdate.as_deref(), entry.short_date.as_deref())?;
            let id = entry
                .showid
                .as_ref()
                .and_then(value_string)
                .or_else(|| entry.show_id.as_ref().and_then(value_string))
                .unwrap_or_else(|| {
                    let venue_id = entry
                        .venueid
                        .as_ref()
                        .and_then(value_string)
                        .unwrap_or_default();
                    format!("{}-{}", venue_id, date)
                });
            let venue = entry
                .venue
                .or(entry.venue_name)
                .or(entry.location)
                .unwrap_or_default();
            Some(UpcomingShow {
                id,
                date,
                venue: strip_html(&venue),
                city: entry.city.unwrap_or_default(),
                state: entry.state.or(entry.region).unwrap_or_default(),
                country: entry.country.unwrap_or_default(),
                url: entry.url.or(entry.link).unwrap_or_default(),
            })
        })
        .collect();

    let mut seen = HashSet::new();
    shows.retain(|show| seen.insert(show.id.clone()));
    // ISO dates sort chronologically as strings
    shows.sort_by(|a, b| a.date.cmp(&b.date));
    shows
}
