//! YouTube Data API v3 client
//!
//! Uses the official API with a key from configuration.

use super::models::*;
use super::traits::ChannelSource;
use crate::config::YouTubeSettings;
use crate::error::{SearchError, SearchResult};
use crate::network::HttpClient;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// The API caps `maxResults` at 50
const MAX_PAGE_SIZE: u32 = 50;

/// HTTP-backed [`ChannelSource`]
pub struct YouTubeClient {
    http: HttpClient,
    api_url: String,
    api_key: Option<String>,
    max_results: u32,
}

impl YouTubeClient {
    pub fn new(http: HttpClient, settings: &YouTubeSettings) -> Self {
        Self {
            http,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key: settings
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            max_results: settings.max_results.clamp(1, MAX_PAGE_SIZE),
        }
    }

    fn key(&self) -> SearchResult<&str> {
        self.api_key.as_deref().ok_or(SearchError::MissingApiKey)
    }

    /// GET an API resource and return its JSON body
    async fn fetch(&self, resource: &str, params: &[(&str, String)]) -> anyhow::Result<Value> {
        let url = format!("{}/{}", self.api_url, resource);
        let response = self.http.get_with_params(&url, params).await?;

        debug!("YouTube {} responded with status {}", resource, response.status);

        response.json().map_err(|e| {
            if response.is_success() {
                anyhow::anyhow!("Invalid JSON from YouTube {}: {}", resource, e)
            } else {
                anyhow::anyhow!("YouTube {} returned HTTP {}", resource, response.status)
            }
        })
    }

    /// Turn a body into `T`, surfacing API error payloads as upstream rejections
    fn decode<T: DeserializeOwned>(body: Value, fallback: &str) -> SearchResult<T> {
        if let Some(message) = api_error_message(&body, fallback) {
            return Err(SearchError::Upstream(message));
        }

        serde_json::from_value(body).map_err(|e| SearchError::Unexpected(e.into()))
    }
}

#[async_trait]
impl ChannelSource for YouTubeClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search_channels(&self, keyword: &str) -> SearchResult<Vec<String>> {
        let key = self.key()?;
        let params = [
            ("part", "snippet".to_string()),
            ("type", "channel".to_string()),
            ("q", keyword.to_string()),
            ("maxResults", self.max_results.to_string()),
            ("key", key.to_string()),
        ];

        let body = self.fetch("search", &params).await?;
        let response: SearchListResponse = Self::decode(body, "YouTube API error")?;

        Ok(response.channel_ids())
    }

    async fn channels(&self, ids: &[String]) -> SearchResult<Vec<Channel>> {
        let key = self.key()?;
        let params = [
            (
                "part",
                "statistics,snippet,contentDetails,brandingSettings".to_string(),
            ),
            ("id", ids.join(",")),
            ("key", key.to_string()),
        ];

        let body = self.fetch("channels", &params).await?;
        let response: ChannelListResponse = Self::decode(body, "Failed to get channel stats")?;

        Ok(response.items)
    }

    async fn latest_upload(&self, playlist_id: &str) -> anyhow::Result<Option<Upload>> {
        let key = self.key()?;
        let params = [
            ("part", "snippet".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", "1".to_string()),
            ("key", key.to_string()),
        ];

        let body = self.fetch("playlistItems", &params).await?;
        let response: PlaylistItemListResponse =
            Self::decode(body, "Failed to get playlist items")?;

        Ok(response.latest_upload())
    }
}
