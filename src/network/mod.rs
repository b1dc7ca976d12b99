//! HTTP networking module
//!
//! Provides the outbound HTTP client used to talk to the YouTube Data API.

mod client;
mod headers;

pub use client::{HttpClient, HttpResponse};
pub use headers::{accept_json, user_agent};
