use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;
use crate::phishnet::SetlistProvider;

pub type GuardedProvider = Arc<dyn SetlistProvider>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub provider: GuardedProvider,
}
