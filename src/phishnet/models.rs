//! Normalized show models and the raw upstream payload shapes.
//!
//! The raw structs are deliberately loose: every field is optional and
//! the API's historical field-name variants are all accepted. Only the
//! normalized `Show` / `UpcomingShow` ever leave this module's adapter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A historical show, normalized at the boundary.
///
/// Histories are strictly most-recent-first.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    /// Display date, `MM/DD/YYYY` preferred with ISO fallback.
    pub date: String,
    /// Venue name; may still carry markup, stripped at render time.
    pub venue: String,
    /// Free-text setlist blob. `None` when the API had nothing.
    pub setlist: Option<String>,
}

/// A future show, normalized at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingShow {
    pub id: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub venue: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub url: String,
}

/// One entry of the paged setlists feed.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawSetlist {
    pub showdate: Option<String>,
    pub short_date: Option<String>,
    pub venue: Option<String>,
    pub setlistdata: Option<String>,
}

/// One entry of the upcoming-shows feed. Field spellings vary between
/// API variants, so everything is optional and ids may be numbers or
/// strings.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawUpcomingShow {
    pub showid: Option<Value>,
    pub show_id: Option<Value>,
    pub venueid: Option<Value>,
    pub showdate: Option<String>,
    pub short_date: Option<String>,
    pub venue: Option<String>,
    pub venue_name: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub url: Option<String>,
    pub link: Option<String>,
    pub artist: Option<String>,
    pub artist_name: Option<String>,
    pub band: Option<String>,
    pub artist_slug: Option<String>,
    pub artistid: Option<Value>,
    pub gid: Option<String>,
    pub group: Option<String>,
}
