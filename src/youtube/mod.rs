//! YouTube Data API v3 integration
//!
//! Wire models for the three read-only query shapes the search pipeline
//! uses, the [`ChannelSource`] seam, and its HTTP implementation.

mod client;
mod models;
mod traits;

pub use client::YouTubeClient;
pub use models::*;
pub use traits::*;
