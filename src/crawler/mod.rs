//! Crawl engine
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and outcome classification
//! - Listing-page candidate enumeration
//! - Visit coordination, the parallelism bound, and the completion barrier

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use parser::{listing_candidates, ListingCandidate};

use crate::config::CrawlOptions;
use crate::record::Record;
use crate::MarqueeError;
use url::Url;

/// Runs a complete crawl.
///
/// Visits the root listing page, follows up to the configured number of
/// detail links, and returns the extracted records once no work is
/// queued or in flight.
pub async fn crawl(options: CrawlOptions, root: &Url) -> Result<Vec<Record>, MarqueeError> {
    let coordinator = Coordinator::new(options)?;
    Ok(coordinator.run(root).await)
}
