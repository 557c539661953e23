//! HTTP fetching
//!
//! One client is built per run and shared across visits. Failures are
//! classified but never escalated: a page that cannot be fetched is
//! simply absent from the results.

use crate::MarqueeError;
use reqwest::Client;
use std::time::Duration;

/// Result of fetching one page
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched a body
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client shared by every visit in a run.
pub fn build_http_client() -> Result<Client, MarqueeError> {
    Client::builder()
        .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(MarqueeError::Client)
}

/// Fetches a page and classifies the outcome.
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchOutcome::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchOutcome::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            // Classify error
            if e.is_timeout() {
                FetchOutcome::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchOutcome::NetworkError {
                    error: "Connection refused".to_string(),
                }
            } else {
                FetchOutcome::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}
