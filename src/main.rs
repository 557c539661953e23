//! Marquee main entry point
//!
//! This is the command-line interface for the marquee listing scraper.

use clap::Parser;
use marquee::config::CrawlOptions;
use marquee::crawler::crawl;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Marquee: a bounded listing-page scraper
///
/// Marquee visits a listing page, follows up to COUNT detail links with a
/// fixed parallelism cap, and prints one JSON array of extracted records
/// after every fetch has completed.
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(version = "1.0.0")]
#[command(about = "A bounded listing-page scraper", long_about = None)]
struct Cli {
    /// Listing page URL to start from
    #[arg(value_name = "URL")]
    url: Url,

    /// Maximum number of detail pages to visit
    #[arg(value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let options = CrawlOptions::with_page_limit(cli.count as usize);
    let records = crawl(options, &cli.url).await?;

    tracing::info!("Crawl complete: {} records", records.len());

    // The result line is the only thing written to stdout.
    let json = marquee::results::to_json_line(&records)?;
    println!("{}", json);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("marquee=info,warn"),
            1 => EnvFilter::new("marquee=debug,info"),
            2 => EnvFilter::new("marquee=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
