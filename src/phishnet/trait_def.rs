//! Provider seam between the HTTP upstream and the rotation core.

use async_trait::async_trait;
use thiserror::Error;

use super::models::{Show, UpcomingShow};

/// Failures the provider layer can surface. These never reach the
/// rotation core; the caller degrades or reports them.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("unusable upstream payload: {0}")]
    Payload(String),
}

/// Source of setlist history and the upcoming schedule.
///
/// Implemented by the real API client and by test fixtures.
#[async_trait]
pub trait SetlistProvider: Send + Sync {
    /// Recent shows, strictly most-recent-first, bounded to roughly the
    /// last two years.
    async fn recent_setlists(&self) -> Result<Vec<Show>, ProviderError>;

    /// Known future shows for the tracked artist, ascending by date.
    /// May legitimately be empty.
    async fn upcoming_shows(&self) -> Result<Vec<UpcomingShow>, ProviderError>;
}
