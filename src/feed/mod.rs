//! Miniflux feed service: wire models and the REST client.

mod client;
mod error;
mod models;

pub use client::MinifluxClient;
pub use error::FeedError;
pub use models::{is_video_url, video_search_term, Category, Entry, EntryPage, EntryQuery, Feed};
