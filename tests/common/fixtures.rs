//! Canned providers and show builders.

use async_trait::async_trait;
use likelyhood_server::phishnet::{ProviderError, SetlistProvider, Show, UpcomingShow};

/// In-memory provider handing out fixed data, or failing on demand.
pub struct FixtureProvider {
    pub history: Vec<Show>,
    pub upcoming: Vec<UpcomingShow>,
    pub fail_history: bool,
    pub fail_upcoming: bool,
}

impl FixtureProvider {
    pub fn new(history: Vec<Show>, upcoming: Vec<UpcomingShow>) -> Self {
        Self {
            history,
            upcoming,
            fail_history: false,
            fail_upcoming: false,
        }
    }

    pub fn failing_history() -> Self {
        Self {
            history: Vec::new(),
            upcoming: Vec::new(),
            fail_history: true,
            fail_upcoming: false,
        }
    }

    pub fn failing_upcoming(history: Vec<Show>) -> Self {
        Self {
            history,
            upcoming: Vec::new(),
            fail_history: false,
            fail_upcoming: true,
        }
    }
}

#[async_trait]
impl SetlistProvider for FixtureProvider {
    async fn recent_setlists(&self) -> Result<Vec<Show>, ProviderError> {
        if self.fail_history {
            return Err(ProviderError::Payload("fixture history failure".to_string()));
        }
        Ok(self.history.clone())
    }

    async fn upcoming_shows(&self) -> Result<Vec<UpcomingShow>, ProviderError> {
        if self.fail_upcoming {
            return Err(ProviderError::Payload(
                "fixture upcoming failure".to_string(),
            ));
        }
        Ok(self.upcoming.clone())
    }
}

pub fn show(date: &str, venue: &str, setlist: Option<&str>) -> Show {
    Show {
        date: date.to_string(),
        venue: venue.to_string(),
        setlist: setlist.map(|s| s.to_string()),
    }
}

pub fn upcoming_show(id: &str, date: &str, venue: &str) -> UpcomingShow {
    UpcomingShow {
        id: id.to_string(),
        date: date.to_string(),
        venue: venue.to_string(),
        city: "Commerce City".to_string(),
        state: "CO".to_string(),
        country: "USA".to_string(),
        url: format!("https://example.com/shows/{}", id),
    }
}

/// Four-show history with the tracked song at index 2, behind a venue
/// anchor that normalization should strip.
pub fn history_with_hood_two_shows_back() -> Vec<Show> {
    vec![
        show("08/05/2025", "Venue A", Some("Tweezer, Ghost")),
        show("08/03/2025", "Venue B", Some("Sand, Ruby Waves")),
        show(
            "08/01/2025",
            "<a href=\"/venues/1\">The Gorge</a>",
            Some("Set 2: Harry Hood > Cavern"),
        ),
        show("07/30/2025", "Venue D", None),
    ]
}

/// History that never plays the tracked song.
pub fn history_without_hood() -> Vec<Show> {
    vec![
        show("08/05/2025", "Venue A", Some("Tweezer, Ghost")),
        show("08/03/2025", "Venue B", Some("Sand, Ruby Waves")),
        show("08/01/2025", "Venue C", Some("Down with Disease")),
    ]
}

/// An ascending six-show schedule starting far in the future.
pub fn far_future_schedule() -> Vec<UpcomingShow> {
    (0..6)
        .map(|i| {
            upcoming_show(
                &format!("s{}", i),
                &format!("2099-09-{:02}", i + 1),
                &format!("Venue {}", i),
            )
        })
        .collect()
}
