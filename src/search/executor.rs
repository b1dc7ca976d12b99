//! Search execution and enrichment

use super::models::{CreatorQuery, CreatorRecord, FollowerRange};
use crate::config::Settings;
use crate::contacts::ContactInfo;
use crate::error::{SearchError, SearchResult};
use crate::network::HttpClient;
use crate::youtube::{Channel, ChannelSource, Upload, YouTubeClient};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Creator search pipeline: keyword search, bulk channel lookup, filtering
/// and per-channel enrichment
pub struct CreatorSearch {
    /// Channel data source
    source: Arc<dyn ChannelSource>,
    /// Latest-upload lookups in flight at once
    enrich_concurrency: usize,
    /// Upper subscriber bound when the request has none
    default_max_followers: u64,
}

impl CreatorSearch {
    /// Create a new search pipeline over a channel source
    pub fn new(source: Arc<dyn ChannelSource>) -> Self {
        Self {
            source,
            enrich_concurrency: 1,
            default_max_followers: FollowerRange::default().max,
        }
    }

    /// Create a pipeline backed by the YouTube Data API
    pub fn from_settings(settings: &Settings, client: HttpClient) -> Self {
        let source = Arc::new(YouTubeClient::new(client, &settings.youtube));

        Self::new(source)
            .with_concurrency(settings.search.enrich_concurrency)
            .with_default_max_followers(settings.search.default_max_followers)
    }

    /// Set how many latest-upload lookups may run at once
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.enrich_concurrency = concurrency.max(1);
        self
    }

    /// Set the upper bound used when a request supplies none
    pub fn with_default_max_followers(mut self, max: u64) -> Self {
        self.default_max_followers = max;
        self
    }

    /// Build subscriber bounds, applying the configured defaults
    pub fn follower_range(&self, min: Option<u64>, max: Option<u64>) -> FollowerRange {
        FollowerRange::with_default_max(min, max, self.default_max_followers)
    }

    /// Execute a creator search.
    ///
    /// Errors from the keyword search or the bulk channel lookup abort the
    /// whole request; a failed latest-upload lookup only blanks that record's
    /// video fields.
    pub async fn execute(&self, query: &CreatorQuery) -> SearchResult<Vec<CreatorRecord>> {
        if query.is_empty() {
            return Err(SearchError::InvalidInput("Keyword is required".to_string()));
        }

        if !self.source.is_configured() {
            return Err(SearchError::MissingApiKey);
        }

        let keyword = query.trimmed_keyword();
        let start = Instant::now();
        let range = query.followers;

        let ids = self.source.search_channels(keyword).await?;
        if ids.is_empty() {
            info!("Search '{}' matched no channels", keyword);
            return Ok(Vec::new());
        }

        debug!("Search '{}' matched {} channels", keyword, ids.len());

        let channels = self.source.channels(&ids).await?;
        let total = channels.len();

        let matching: Vec<Channel> = channels
            .into_iter()
            .filter(|channel| {
                let count = channel.subscriber_count();
                let keep = range.contains(count);
                if !keep {
                    debug!(
                        "Skipping channel {} with {} subscribers outside [{}, {}]",
                        channel.id, count, range.min, range.max
                    );
                }
                keep
            })
            .collect();

        // `buffered` yields in input order regardless of completion order
        let records: Vec<CreatorRecord> = stream::iter(matching)
            .map(|channel| async move {
                let contacts = ContactInfo::from_description(&channel.snippet.description);
                if contacts.is_empty() {
                    debug!("No contacts in description of channel {}", channel.id);
                }
                let upload = self.latest_upload(&channel).await;
                CreatorRecord::from_channel(&channel, keyword, contacts, upload)
            })
            .buffered(self.enrich_concurrency)
            .collect::<Vec<_>>()
            .await;

        info!(
            "Search '{}' returned {} of {} channels in {:?}",
            keyword,
            records.len(),
            total,
            start.elapsed()
        );

        Ok(records)
    }

    /// Look up a channel's latest upload, swallowing any failure
    async fn latest_upload(&self, channel: &Channel) -> Option<Upload> {
        let playlist = channel.uploads_playlist()?;

        match self.source.latest_upload(playlist).await {
            Ok(upload) => upload,
            Err(e) => {
                warn!("Latest upload lookup failed for channel {}: {}", channel.id, e);
                None
            }
        }
    }
}
