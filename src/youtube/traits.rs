//! Channel data source trait

use super::models::{Channel, Upload};
use crate::error::SearchResult;
use async_trait::async_trait;

/// Read-only access to channel data on the video platform
#[async_trait]
pub trait ChannelSource: Send + Sync {
    /// Whether the source has the credentials it needs
    fn is_configured(&self) -> bool {
        true
    }

    /// Channel ids matching a keyword, in relevance order
    async fn search_channels(&self, keyword: &str) -> SearchResult<Vec<String>>;

    /// Statistics, snippet and content details for the given channel ids
    async fn channels(&self, ids: &[String]) -> SearchResult<Vec<Channel>>;

    /// Most recent item of an uploads playlist.
    ///
    /// Failures here are per-channel and never abort a search.
    async fn latest_upload(&self, playlist_id: &str) -> anyhow::Result<Option<Upload>>;
}
