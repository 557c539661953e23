//! Listing-page candidate enumeration
//!
//! Candidates keep their 1-based document-order position even when a
//! neighbour's href is malformed; the position is what the discovery cap
//! is checked against.

use scraper::{Html, Selector};
use url::Url;

/// One candidate detail link discovered on a listing page
#[derive(Debug, Clone)]
pub struct ListingCandidate {
    /// Absolute URL of the detail page
    pub url: Url,

    /// 1-based position among candidates on this page
    pub position: usize,
}

/// Enumerates candidate links in document order.
///
/// A candidate without an href, or whose href does not resolve against
/// `base`, is logged and dropped. It still consumes a position.
pub fn listing_candidates(
    document: &Html,
    selector: &Selector,
    base: &Url,
) -> Vec<ListingCandidate> {
    let mut candidates = Vec::new();

    for (index, element) in document.select(selector).enumerate() {
        let position = index + 1;

        let href = match element.value().attr("href") {
            Some(href) => href,
            None => {
                tracing::warn!("Candidate {} has no href, dropping it", position);
                continue;
            }
        };

        match base.join(href) {
            Ok(url) => candidates.push(ListingCandidate { url, position }),
            Err(e) => {
                tracing::warn!(
                    "Candidate {} href {:?} does not resolve: {}",
                    position,
                    href,
                    e
                );
            }
        }
    }

    candidates
}
