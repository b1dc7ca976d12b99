//! Creator search orchestration
//!
//! Runs the keyword search, bulk channel lookup and latest-upload enrichment
//! against a [`ChannelSource`](crate::youtube::ChannelSource).

mod executor;
mod models;

pub use executor::CreatorSearch;
pub use models::*;
