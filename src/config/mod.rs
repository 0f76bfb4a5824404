mod file_config;

pub use file_config::{FileConfig, UpstreamConfig};

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;

/// Song tracked by the stats endpoint unless configured otherwise.
pub const DEFAULT_TARGET_SONG: &str = "Harry Hood";

/// Artist whose shows the upcoming feed is filtered to.
pub const DEFAULT_ARTIST: &str = "Phish";

const DEFAULT_BASE_URL: &str = "https://api.phish.net/v3";

/// Environment variable consulted for the upstream API key when neither
/// the config file nor the CLI provides one.
pub const API_KEY_ENV_VAR: &str = "PHISH_API_KEY";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub api_key: Option<String>,
    pub target_song: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub target_song: String,
    pub upstream: UpstreamSettings,
}

/// Settings for upstream setlist API access.
#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub api_key: String,
    pub artist: String,
    pub timeout_secs: u64,
    pub page_size: usize,
    pub max_pages: usize,
    pub history_window_days: i64,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present; the upstream API
    /// key additionally falls back to the environment.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let target_song = file
            .target_song
            .or_else(|| cli.target_song.clone())
            .unwrap_or_else(|| DEFAULT_TARGET_SONG.to_string());
        if target_song.trim().is_empty() {
            bail!("target_song must not be empty");
        }

        let up = file.upstream.unwrap_or_default();
        let api_key = up
            .api_key
            .or_else(|| cli.api_key.clone())
            .or_else(|| std::env::var(API_KEY_ENV_VAR).ok())
            .filter(|key| !key.trim().is_empty());
        let api_key = match api_key {
            Some(key) => key,
            None => bail!(
                "upstream api key must be provided via the config file, --api-key or {}",
                API_KEY_ENV_VAR
            ),
        };

        let upstream = UpstreamSettings {
            base_url: up
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            artist: up.artist.unwrap_or_else(|| DEFAULT_ARTIST.to_string()),
            timeout_secs: up.timeout_secs.unwrap_or(15),
            page_size: up.page_size.unwrap_or(200),
            max_pages: up.max_pages.unwrap_or(10),
            history_window_days: up.history_window_days.unwrap_or(730),
        };

        Ok(Self {
            port,
            logging_level,
            frontend_dir_path,
            target_song,
            upstream,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
