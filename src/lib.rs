//! Creator Finder: find YouTube creators by niche and export their contact details
//!
//! A keyword search against the YouTube Data API, filtered by subscriber
//! count and enriched with contacts pulled from channel descriptions.

pub mod config;
pub mod contacts;
pub mod error;
pub mod export;
pub mod network;
pub mod search;
pub mod web;
pub mod youtube;

pub use config::Settings;
pub use error::{SearchError, SearchResult};
pub use search::{CreatorQuery, CreatorRecord, CreatorSearch, FollowerRange};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
