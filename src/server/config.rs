use super::RequestsLoggingLevel;
use crate::config::DEFAULT_TARGET_SONG;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub frontend_dir_path: Option<String>,
    /// Song the stats endpoint reports on.
    pub target_song: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3000,
            frontend_dir_path: None,
            target_song: DEFAULT_TARGET_SONG.to_string(),
        }
    }
}
