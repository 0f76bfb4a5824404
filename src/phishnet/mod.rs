//! Upstream setlist API access and payload normalization.

mod client;
mod models;
pub mod normalize;
mod trait_def;

pub use client::PhishNetClient;
pub use models::{RawSetlist, RawUpcomingShow, Show, UpcomingShow};
pub use trait_def::{ProviderError, SetlistProvider};
