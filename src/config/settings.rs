//! Settings structures for Creator Finder configuration

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use url::Url;

/// Upper subscriber bound used when the caller supplies none
pub const DEFAULT_MAX_FOLLOWERS: u64 = 999_999_999;

/// Longest accepted outbound request timeout, in seconds
pub const MAX_REQUEST_TIMEOUT: f64 = 300.0;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub youtube: YouTubeSettings,
    pub outgoing: OutgoingSettings,
    pub search: SearchSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with process environment variables
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable source
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("YOUTUBE_API_KEY") {
            if !val.trim().is_empty() {
                self.youtube.api_key = Some(val.trim().to_string());
            }
        }
        if let Some(val) = lookup("CREATOR_FINDER_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = lookup("CREATOR_FINDER_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("CREATOR_FINDER_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = lookup("CREATOR_FINDER_ENRICH_CONCURRENCY") {
            if let Ok(n) = val.parse::<usize>() {
                self.search.enrich_concurrency = n.max(1);
            }
        }
    }

    /// Configured API key, if any non-blank one is present
    pub fn api_key(&self) -> Option<&str> {
        self.youtube
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        let api_url = Url::parse(&self.youtube.api_url)
            .with_context(|| format!("Invalid youtube.api_url '{}'", self.youtube.api_url))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            bail!("youtube.api_url must use http or https");
        }
        let timeout = self.outgoing.request_timeout;
        if !(timeout > 0.0 && timeout <= MAX_REQUEST_TIMEOUT) {
            bail!(
                "outgoing.request_timeout must be between 0 and {} seconds, got {}",
                MAX_REQUEST_TIMEOUT,
                timeout
            );
        }
        if self.search.enrich_concurrency == 0 {
            bail!("search.enrich_concurrency must be at least 1");
        }
        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name displayed in UI
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "YouTube Creator Search".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8888,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// YouTube Data API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YouTubeSettings {
    /// API key (usually supplied through YOUTUBE_API_KEY)
    pub api_key: Option<String>,
    /// Base URL of the Data API v3
    pub api_url: String,
    /// Channels requested from the keyword search
    pub max_results: u32,
}

impl Default for YouTubeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: "https://www.googleapis.com/youtube/v3".to_string(),
            max_results: 50,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Per-request timeout in seconds
    pub request_timeout: f64,
    /// Max idle connections kept per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Search pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Latest-upload lookups allowed in flight at once (1 = one after another)
    pub enrich_concurrency: usize,
    /// Upper subscriber bound applied when the request has none
    pub default_max_followers: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            enrich_concurrency: 4,
            default_max_followers: DEFAULT_MAX_FOLLOWERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8888);
        assert!(!settings.general.debug);
        assert_eq!(settings.youtube.max_results, 50);
        assert_eq!(settings.search.default_max_followers, DEFAULT_MAX_FOLLOWERS);
        assert!(settings.api_key().is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "server:\n  port: 9000\nyoutube:\n  api_key: abc123\n";
        let settings = Settings::from_yaml(yaml).unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(settings.api_key(), Some("abc123"));
        assert_eq!(settings.outgoing.request_timeout, 10.0);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("YOUTUBE_API_KEY", "from-env"),
            ("CREATOR_FINDER_PORT", "3000"),
            ("CREATOR_FINDER_ENRICH_CONCURRENCY", "0"),
            ("CREATOR_FINDER_DEBUG", "true"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(settings.api_key(), Some("from-env"));
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.search.enrich_concurrency, 1);
        assert!(settings.general.debug);
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some("   ".to_string());
        assert!(settings.api_key().is_none());
    }

    #[test]
    fn test_validate() {
        assert!(Settings::default().validate().is_ok());

        let mut settings = Settings::default();
        settings.youtube.api_url = "not a url".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.youtube.api_url = "ftp://example.com/youtube/v3".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.search.enrich_concurrency = 0;
        assert!(settings.validate().is_err());

        for timeout in [0.0, -1.0, f64::INFINITY, f64::NAN, 1e30] {
            let mut settings = Settings::default();
            settings.outgoing.request_timeout = timeout;
            assert!(settings.validate().is_err(), "timeout {} accepted", timeout);
        }

        let settings = Settings::from_yaml("outgoing:\n  request_timeout: .inf\n").unwrap();
        assert!(settings.validate().is_err());
    }
}
