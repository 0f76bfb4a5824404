//! HTTP client for the upstream setlist API.
//!
//! The API is reachable both as JSONP (`callback=?`) and, on some
//! deployments, as plain JSON; payloads arrive as
//! `{"response": {"data": [...]}}` either way.

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::models::{RawSetlist, RawUpcomingShow, Show, UpcomingShow};
use super::normalize;
use super::trait_def::{ProviderError, SetlistProvider};
use crate::config::UpstreamSettings;

pub struct PhishNetClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    artist: String,
    page_size: usize,
    max_pages: usize,
    history_window_days: i64,
}

impl PhishNetClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            artist: settings.artist.clone(),
            page_size: settings.page_size,
            max_pages: settings.max_pages,
            history_window_days: settings.history_window_days,
        })
    }

    /// One raw page of the latest-setlists feed.
    async fn latest_setlists_page(&self, offset: usize) -> Result<Vec<RawSetlist>, ProviderError> {
        let url = format!("{}/setlists/latest", self.base_url);
        let query = [
            ("apikey", self.api_key.clone()),
            ("callback", "?".to_string()),
            ("limit", self.page_size.to_string()),
            ("offset", offset.to_string()),
        ];
        let response = self.client.get(&url).query(&query).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }
        let body = response.text().await?;
        let payload = parse_jsonp(&body)?;
        Ok(typed_data(payload))
    }

    /// One candidate upcoming-shows URL. `Ok(None)` means the variant
    /// answered but without a usable data array.
    async fn try_upcoming(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Option<Vec<RawUpcomingShow>>, ProviderError> {
        let response = self.client.get(url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }
        let body = response.text().await?;
        let payload = parse_jsonp(&body)?;
        Ok(data_array(&payload).map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        }))
    }
}

#[async_trait]
impl SetlistProvider for PhishNetClient {
    /// Page through the latest setlists until the window is covered:
    /// stops on an empty page, at the page cap, or once a page's oldest
    /// show falls outside the history window.
    async fn recent_setlists(&self) -> Result<Vec<Show>, ProviderError> {
        let cutoff = Utc::now().date_naive() - ChronoDuration::days(self.history_window_days);
        let mut shows = Vec::new();
        let mut offset = 0;

        for _ in 0..self.max_pages {
            let page = self.latest_setlists_page(offset).await?;
            if page.is_empty() {
                break;
            }
            let normalized = normalize::normalize_setlists(page);
            let oldest = normalized
                .last()
                .and_then(|show| normalize::parse_show_date(&show.date));
            shows.extend(normalized);
            if let Some(date) = oldest {
                if date < cutoff {
                    break;
                }
            }
            offset += self.page_size;
        }

        Ok(shows)
    }

    /// Try the known URL variants of the upcoming-shows feed until one
    /// yields a payload. All variants failing degrades to an empty
    /// schedule rather than an error.
    async fn upcoming_shows(&self) -> Result<Vec<UpcomingShow>, ProviderError> {
        let candidates: [(String, Vec<(&str, String)>); 3] = [
            (
                format!("{}/shows/upcoming", self.base_url),
                vec![
                    ("apikey", self.api_key.clone()),
                    ("callback", "?".to_string()),
                ],
            ),
            (
                format!("{}/shows/upcoming.json", self.base_url),
                vec![("apikey", self.api_key.clone())],
            ),
            (
                format!("{}/shows/upcoming", self.base_url),
                vec![
                    ("apikey", self.api_key.clone()),
                    ("format", "json".to_string()),
                ],
            ),
        ];

        for (url, query) in &candidates {
            match self.try_upcoming(url, query).await {
                Ok(Some(raw)) => {
                    return Ok(normalize::normalize_upcoming(raw, &self.artist));
                }
                Ok(None) => continue,
                Err(err) => {
                    debug!("upcoming-shows candidate {} failed: {}", url, err);
                    continue;
                }
            }
        }

        Ok(Vec::new())
    }
}

/// Parse a `callback({...})` JSONP body, falling back to plain JSON.
fn parse_jsonp(body: &str) -> Result<Value, ProviderError> {
    let trimmed = body.trim();
    if let (Some(start), Some(end)) = (trimmed.find('('), trimmed.rfind(')')) {
        if end > start {
            if let Ok(value) = serde_json::from_str(&trimmed[start + 1..end]) {
                return Ok(value);
            }
        }
    }
    serde_json::from_str(trimmed)
        .map_err(|err| ProviderError::Payload(format!("not JSONP or JSON: {}", err)))
}

/// The `response.data` array, or the payload itself when the API
/// returns a bare array.
fn data_array(payload: &Value) -> Option<Vec<Value>> {
    match payload {
        Value::Array(items) => Some(items.clone()),
        Value::Object(map) => map.get("response")?.get("data")?.as_array().cloned(),
        _ => None,
    }
}

/// Tolerantly deserialize each entry of the data array, skipping any
/// that do not fit the expected shape.
fn typed_data<T: DeserializeOwned>(payload: Value) -> Vec<T> {
    data_array(&payload)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}
