//! Crawl options and validation
//!
//! Options mirror the command-line contract: the page limit comes from
//! the caller, depth and parallelism carry fixed defaults.

use crate::ConfigError;

/// Traversal and concurrency limits for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Maximum hop count from the root page (root = 0)
    pub max_depth: u32,

    /// Maximum number of concurrently in-flight page visits
    pub parallelism: usize,

    /// Maximum number of detail pages visited in one run
    pub page_limit: usize,
}

impl CrawlOptions {
    /// Default limits with a caller-supplied page limit.
    pub fn with_page_limit(page_limit: usize) -> Self {
        Self {
            page_limit,
            ..Self::default()
        }
    }
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_depth: 2,
            parallelism: 5,
            page_limit: 1,
        }
    }
}

/// Validates crawl options
pub fn validate(options: &CrawlOptions) -> Result<(), ConfigError> {
    if options.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "max_depth must be >= 1, got {}",
            options.max_depth
        )));
    }

    if options.parallelism < 1 || options.parallelism > 100 {
        return Err(ConfigError::Validation(format!(
            "parallelism must be between 1 and 100, got {}",
            options.parallelism
        )));
    }

    if options.page_limit < 1 {
        return Err(ConfigError::Validation(format!(
            "page_limit must be >= 1, got {}",
            options.page_limit
        )));
    }

    Ok(())
}
