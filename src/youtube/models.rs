//! Response models for the YouTube Data API
//!
//! Every field is optional on the wire; absent or `null` values fall back to
//! their defaults instead of failing the whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treat an explicit `null` the same as a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Extract the error message from an API error payload, if the body carries one
pub fn api_error_message(body: &Value, fallback: &str) -> Option<String> {
    let error = body.get("error")?;
    let message = match error {
        Value::Null => return None,
        Value::String(s) => s.as_str(),
        other => other.get("message").and_then(|m| m.as_str()).unwrap_or(""),
    };

    if message.trim().is_empty() {
        Some(fallback.to_string())
    } else {
        Some(message.to_string())
    }
}

/// `search.list` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchListResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub items: Vec<SearchItem>,
}

impl SearchListResponse {
    /// Channel ids in result order, skipping items without one
    pub fn channel_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.channel_id())
            .map(|id| id.to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default, deserialize_with = "nullable")]
    pub id: SearchItemId,
    #[serde(default, deserialize_with = "nullable")]
    pub snippet: SearchItemSnippet,
}

impl SearchItem {
    /// Channel id from the snippet, falling back to the resource id
    pub fn channel_id(&self) -> Option<&str> {
        self.snippet
            .channel_id
            .as_deref()
            .or(self.id.channel_id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    #[serde(default)]
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemSnippet {
    #[serde(default)]
    pub channel_id: Option<String>,
}

/// `channels.list` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub items: Vec<Channel>,
}

/// A channel with statistics, snippet and content details
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub snippet: ChannelSnippet,
    #[serde(default, deserialize_with = "nullable")]
    pub statistics: ChannelStatistics,
    #[serde(default, deserialize_with = "nullable")]
    pub content_details: ChannelContentDetails,
}

impl Channel {
    /// Subscriber count, 0 when hidden, missing or not a number
    pub fn subscriber_count(&self) -> u64 {
        match &self.statistics.subscriber_count {
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
            _ => 0,
        }
    }

    /// Id of the channel's uploads playlist
    pub fn uploads_playlist(&self) -> Option<&str> {
        self.content_details
            .related_playlists
            .uploads
            .as_deref()
            .filter(|id| !id.is_empty())
    }

    /// Canonical channel URL
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelSnippet {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    /// Sent as a decimal string by the API
    #[serde(default)]
    pub subscriber_count: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    #[serde(default, deserialize_with = "nullable")]
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelatedPlaylists {
    #[serde(default)]
    pub uploads: Option<String>,
}

/// `playlistItems.list` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistItemListResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub items: Vec<PlaylistItem>,
}

impl PlaylistItemListResponse {
    /// The first item as an [`Upload`], if it has a video id
    pub fn latest_upload(&self) -> Option<Upload> {
        let snippet = &self.items.first()?.snippet;
        let video_id = snippet
            .resource_id
            .video_id
            .as_deref()
            .filter(|id| !id.is_empty())?;

        Some(Upload {
            url: format!("https://www.youtube.com/watch?v={}", video_id),
            date: snippet
                .published_at
                .as_deref()
                .and_then(|ts| ts.split('T').next())
                .unwrap_or_default()
                .to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistItem {
    #[serde(default, deserialize_with = "nullable")]
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Most recent upload of a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Watch URL
    pub url: String,
    /// Publication date, `YYYY-MM-DD`
    pub date: String,
}
