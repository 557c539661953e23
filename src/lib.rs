//! Marquee: a bounded listing-page scraper
//!
//! This crate implements a small parallel crawler: it visits a listing
//! page, follows a capped number of detail links concurrently, extracts
//! one record per detail page, and hands back the accumulated records
//! once no fetch is queued or in flight.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod record;
pub mod results;

use thiserror::Error;

/// Main error type for Marquee operations
#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Marquee operations
pub type Result<T> = std::result::Result<T, MarqueeError>;

// Re-export commonly used types
pub use config::CrawlOptions;
pub use crawler::{crawl, Coordinator};
pub use record::Record;
pub use results::RecordSink;
