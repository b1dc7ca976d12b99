//! Creator search query and result models

use crate::config::DEFAULT_MAX_FOLLOWERS;
use crate::contacts::ContactInfo;
use crate::youtube::{Channel, Upload};
use serde::{Deserialize, Serialize};

/// Inclusive subscriber-count bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerRange {
    pub min: u64,
    pub max: u64,
}

impl Default for FollowerRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_MAX_FOLLOWERS,
        }
    }
}

impl FollowerRange {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self::with_default_max(min, max, DEFAULT_MAX_FOLLOWERS)
    }

    /// Bounds with a caller-chosen fallback for a missing maximum
    pub fn with_default_max(min: Option<u64>, max: Option<u64>, default_max: u64) -> Self {
        Self {
            min: min.unwrap_or(0),
            max: max.unwrap_or(default_max),
        }
    }

    /// Whether `count` lies within the bounds, both ends included
    pub fn contains(&self, count: u64) -> bool {
        self.min <= count && count <= self.max
    }
}

/// Parse a user-supplied bound; blank, negative or non-numeric input is `None`
pub fn parse_bound(raw: Option<&str>) -> Option<u64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

/// A single creator search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorQuery {
    /// Search keyword as supplied
    pub keyword: String,
    /// Subscriber bounds
    pub followers: FollowerRange,
}

impl CreatorQuery {
    pub fn new(keyword: impl Into<String>, followers: FollowerRange) -> Self {
        Self {
            keyword: keyword.into(),
            followers,
        }
    }

    /// Query with no subscriber bounds
    pub fn simple(keyword: impl Into<String>) -> Self {
        Self::new(keyword, FollowerRange::default())
    }

    /// Keyword with surrounding whitespace removed
    pub fn trimmed_keyword(&self) -> &str {
        self.keyword.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.trimmed_keyword().is_empty()
    }
}

/// One enriched channel in a result set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatorRecord {
    /// Channel display name
    pub handle: String,
    /// Channel URL
    pub link: String,
    /// Keyword that produced this record
    pub keyword: String,
    /// Subscriber count
    pub followers: u64,
    pub email: String,
    pub last_video: String,
    pub last_video_date: String,
    pub instagram: String,
    pub tiktok: String,
    pub linkedin: String,
}

impl CreatorRecord {
    /// Assemble a record from a channel, its contacts and its latest upload
    pub fn from_channel(
        channel: &Channel,
        keyword: &str,
        contacts: ContactInfo,
        upload: Option<Upload>,
    ) -> Self {
        let upload = upload.unwrap_or(Upload {
            url: String::new(),
            date: String::new(),
        });

        Self {
            handle: channel.snippet.title.clone(),
            link: channel.url(),
            keyword: keyword.to_string(),
            followers: channel.subscriber_count(),
            email: contacts.email,
            last_video: upload.url,
            last_video_date: upload.date,
            instagram: contacts.instagram,
            tiktok: contacts.tiktok,
            linkedin: contacts.linkedin,
        }
    }
}
