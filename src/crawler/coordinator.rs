//! Crawl coordination
//!
//! The coordinator owns one run: it seeds the root visit, bounds
//! concurrent visits with a semaphore, and drains the task set until no
//! visit is queued or in flight. Only then are the results read.

use crate::config::{validate, CrawlOptions};
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::crawler::parser::listing_candidates;
use crate::extract::{extract_record, Selectors};
use crate::record::Record;
use crate::results::RecordSink;
use crate::MarqueeError;
use reqwest::Client;
use scraper::Html;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// One page visit, tagged with its hop count from the root
#[derive(Debug, Clone)]
struct PageVisit {
    url: Url,
    depth: u32,
}

/// Crawl engine for one run
pub struct Coordinator {
    options: CrawlOptions,
    client: Client,
    selectors: Arc<Selectors>,
    sink: RecordSink,
}

impl Coordinator {
    /// Creates a coordinator: validates the options, builds the HTTP
    /// client, and compiles the selector set.
    pub fn new(options: CrawlOptions) -> Result<Self, MarqueeError> {
        validate(&options)?;

        let client = build_http_client()?;
        let selectors = Arc::new(Selectors::new()?);

        Ok(Self {
            options,
            client,
            selectors,
            sink: RecordSink::new(),
        })
    }

    /// Runs the crawl to quiescence and returns the accumulated records.
    ///
    /// Per-page failures are logged and skipped; they never abort the
    /// run. Returns only when no visit is queued or in flight, so record
    /// order is the completion order of the concurrent fetches.
    pub async fn run(&self, root: &Url) -> Vec<Record> {
        let semaphore = Arc::new(Semaphore::new(self.options.parallelism));
        let mut visits: JoinSet<Vec<PageVisit>> = JoinSet::new();

        tracing::info!(
            "Starting crawl at {} (page limit {}, parallelism {})",
            root,
            self.options.page_limit,
            self.options.parallelism
        );

        self.spawn_visit(
            &mut visits,
            &semaphore,
            PageVisit {
                url: root.clone(),
                depth: 0,
            },
        );

        // Completion barrier: every joined visit may hand back follow-up
        // visits, and the loop ends only once the set is fully drained.
        while let Some(joined) = visits.join_next().await {
            match joined {
                Ok(children) => {
                    for child in children {
                        self.spawn_visit(&mut visits, &semaphore, child);
                    }
                }
                Err(e) => tracing::error!("Visit task failed: {}", e),
            }
        }

        tracing::info!("Crawl quiescent with {} records", self.sink.len());

        self.sink.snapshot()
    }

    fn spawn_visit(
        &self,
        visits: &mut JoinSet<Vec<PageVisit>>,
        semaphore: &Arc<Semaphore>,
        visit: PageVisit,
    ) {
        let client = self.client.clone();
        let selectors = Arc::clone(&self.selectors);
        let sink = self.sink.clone();
        let options = self.options.clone();
        let semaphore = Arc::clone(semaphore);

        visits.spawn(async move {
            // The permit bounds fetch and handling together; it is held
            // for the whole visit.
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return Vec::new(),
            };

            visit_page(&client, &selectors, &sink, &options, visit).await
        });
    }
}

/// Fetches one page, extracts a record when the detail container matches,
/// and returns the follow-up visits that fall within the discovery and
/// depth caps.
async fn visit_page(
    client: &Client,
    selectors: &Selectors,
    sink: &RecordSink,
    options: &CrawlOptions,
    visit: PageVisit,
) -> Vec<PageVisit> {
    tracing::debug!("Visiting {} at depth {}", visit.url, visit.depth);

    let (final_url, body) = match fetch_page(client, visit.url.as_str()).await {
        FetchOutcome::Success {
            final_url, body, ..
        } => (final_url, body),
        FetchOutcome::HttpError { status_code } => {
            tracing::warn!("HTTP {} for {}, skipping page", status_code, visit.url);
            return Vec::new();
        }
        FetchOutcome::NetworkError { error } => {
            tracing::warn!("Fetch failed for {}: {}", visit.url, error);
            return Vec::new();
        }
    };

    // Relative hrefs resolve against the post-redirect location.
    let base = match Url::parse(&final_url) {
        Ok(url) => url,
        Err(_) => visit.url.clone(),
    };

    handle_document(&body, &base, visit.depth, options, selectors, sink)
}

/// Handles a fetched document: extraction plus candidate discovery.
///
/// Parsing is synchronous; the parsed document never lives across an
/// await.
fn handle_document(
    body: &str,
    base: &Url,
    depth: u32,
    options: &CrawlOptions,
    selectors: &Selectors,
    sink: &RecordSink,
) -> Vec<PageVisit> {
    let document = Html::parse_document(body);

    if let Some(record) = extract_record(&document, selectors) {
        sink.append(record);
    }

    // Children of a page at the depth limit are never visited.
    let child_depth = depth + 1;
    if child_depth >= options.max_depth {
        return Vec::new();
    }

    listing_candidates(&document, &selectors.listing_link, base)
        .into_iter()
        .filter(|candidate| candidate.position <= options.page_limit)
        .map(|candidate| PageVisit {
            url: candidate.url,
            depth: child_depth,
        })
        .collect()
}
