//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::search::CreatorSearch;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Creator search pipeline
    pub search: Arc<CreatorSearch>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state backed by the YouTube Data API
    pub fn new(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        let search = CreatorSearch::from_settings(&settings, client);
        Self::with_search(settings, search)
    }

    /// Create application state around an existing search pipeline
    pub fn with_search(settings: Settings, search: CreatorSearch) -> anyhow::Result<Self> {
        Ok(Self {
            settings: Arc::new(settings),
            search: Arc::new(search),
            templates: Arc::new(super::Templates::new()?),
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
