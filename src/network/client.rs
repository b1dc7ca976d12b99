//! HTTP client for making requests to the YouTube Data API

use super::headers::{accept_json, user_agent};
use crate::config::OutgoingSettings;
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP response with the body read into memory
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl HttpResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client wrapper configured from outgoing settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
    extra_headers: Vec<(String, String)>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = Duration::try_from_secs_f64(settings.request_timeout.max(0.1))
            .with_context(|| format!("Invalid request timeout {}", settings.request_timeout))?;

        let mut builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .user_agent(user_agent())
            .gzip(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            timeout,
            extra_headers: settings
                .extra_headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        })
    }

    /// GET request with query parameters
    pub async fn get_with_params(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<HttpResponse> {
        let mut req_builder = self
            .client
            .get(url)
            .timeout(self.timeout)
            .header("Accept", accept_json());

        for (key, value) in &self.extra_headers {
            req_builder = req_builder.header(key, value);
        }

        if !params.is_empty() {
            req_builder = req_builder.query(params);
        }

        // Query strings carry the API key; keep it out of error messages
        let response = req_builder.send().await.map_err(|e| e.without_url())?;

        Self::parse_response(response).await
    }

    /// Configured per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn parse_response(response: Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| e.without_url())?;

        Ok(HttpResponse { status, text })
    }
}
