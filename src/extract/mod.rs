//! Detail-page field extraction
//!
//! Extraction is best-effort: each field is an independent first-match
//! lookup, and a selector that matches nothing yields an empty string.

pub mod normalize;

use crate::record::Record;
use crate::MarqueeError;
use self::normalize::{strip_parens, strip_year_from_title};
use scraper::{ElementRef, Html, Selector};

/// Compiled selector set for one crawl run.
///
/// All patterns are fixed and parsed once at engine construction.
#[derive(Debug)]
pub struct Selectors {
    /// Candidate links on a listing page
    pub listing_link: Selector,
    detail_root: Selector,
    year: Selector,
    title: Selector,
    rating: Selector,
    summary: Selector,
    duration: Selector,
    // Sibling-position selector: counts every child of the subtext
    // block, so a markup shift can surface a different credit here.
    genre: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self, MarqueeError> {
        Ok(Self {
            listing_link: parse("td.posterColumn > a")?,
            detail_root: parse("#title-overview-widget")?,
            year: parse("#titleYear")?,
            title: parse(".titleBar h1")?,
            rating: parse("div.ratingValue > strong > span")?,
            summary: parse(".summary_text")?,
            duration: parse("time")?,
            genre: parse("div.subtext > a:nth-child(4)")?,
        })
    }
}

fn parse(pattern: &str) -> Result<Selector, MarqueeError> {
    Selector::parse(pattern).map_err(|_| MarqueeError::Selector(pattern.to_string()))
}

/// Extracts one record from a fetched document.
///
/// Returns `None` when the document has no detail container, which is how
/// listing pages fall through without producing a record.
pub fn extract_record(document: &Html, selectors: &Selectors) -> Option<Record> {
    let scope = document.select(&selectors.detail_root).next()?;

    Some(Record {
        year: strip_parens(&first_text(scope, &selectors.year)),
        title: strip_year_from_title(&first_text(scope, &selectors.title)),
        rating: first_text(scope, &selectors.rating),
        summary: first_text(scope, &selectors.summary),
        duration: first_text(scope, &selectors.duration),
        genre: first_text(scope, &selectors.genre),
    })
}

/// Text of the first descendant matching `selector`, trimmed, or empty.
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> Selectors {
        Selectors::new().unwrap()
    }

    fn detail_document() -> Html {
        Html::parse_document(
            r#"<html><body>
            <div id="title-overview-widget">
                <div class="titleBar"><h1>First Movie <span id="titleYear">(<a href="/year/1999/">1999</a>)</span></h1></div>
                <div class="subtext">
                    <time datetime="PT130M">2h 10min</time>
                    <span class="ghost">|</span>
                    <span class="ghost">|</span>
                    <a href="/genre/drama">Drama</a>
                </div>
                <div class="ratingValue"><strong><span>8.1</span></strong></div>
                <div class="summary_text">A short summary.</div>
            </div>
            </body></html>"#,
        )
    }

    #[test]
    fn test_extract_full_record() {
        let document = detail_document();
        let record = extract_record(&document, &selectors()).unwrap();

        assert_eq!(record.year, "1999");
        // Only leading whitespace is trimmed after the year token goes.
        assert_eq!(record.title, "First Movie ");
        assert_eq!(record.rating, "8.1");
        assert_eq!(record.summary, "A short summary.");
        assert_eq!(record.duration, "2h 10min");
        assert_eq!(record.genre, "Drama");
    }

    #[test]
    fn test_missing_fields_yield_empty_strings() {
        let document = Html::parse_document(
            r#"<html><body>
            <div id="title-overview-widget">
                <div class="titleBar"><h1>Bare Movie</h1></div>
            </div>
            </body></html>"#,
        );
        let record = extract_record(&document, &selectors()).unwrap();

        assert_eq!(record.title, "Bare Movie");
        assert_eq!(record.year, "");
        assert_eq!(record.rating, "");
        assert_eq!(record.summary, "");
        assert_eq!(record.duration, "");
        assert_eq!(record.genre, "");
    }

    #[test]
    fn test_no_detail_container_yields_no_record() {
        let document = Html::parse_document(
            r#"<html><body><table><tr>
            <td class="posterColumn"><a href="/title/1/">One</a></td>
            </tr></table></body></html>"#,
        );
        assert!(extract_record(&document, &selectors()).is_none());
    }

    #[test]
    fn test_genre_selector_takes_fourth_sibling() {
        // The subtext lookup is positional, not semantic: whatever anchor
        // sits fourth wins, here the release date.
        let document = Html::parse_document(
            r#"<html><body>
            <div id="title-overview-widget">
                <div class="subtext">
                    <time datetime="PT90M">1h 30min</time>
                    <span class="ghost">|</span>
                    <a href="/genre/comedy">Comedy</a>
                    <a href="/releaseinfo">12 June 2003</a>
                </div>
            </div>
            </body></html>"#,
        );
        let record = extract_record(&document, &selectors()).unwrap();
        assert_eq!(record.genre, "12 June 2003");
    }

    #[test]
    fn test_first_match_wins() {
        let document = Html::parse_document(
            r#"<html><body>
            <div id="title-overview-widget">
                <div class="summary_text">First summary.</div>
                <div class="summary_text">Second summary.</div>
            </div>
            </body></html>"#,
        );
        let record = extract_record(&document, &selectors()).unwrap();
        assert_eq!(record.summary, "First summary.");
    }
}
