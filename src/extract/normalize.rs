//! Text cleanup for extracted fields

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a parenthesized four-digit year token, e.g. `(1994)`.
static YEAR_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\d{4}\)").unwrap());

/// Removes the first parenthesized year token from a title, then trims
/// leading whitespace.
///
/// Total over any input: a title without a token passes through with only
/// the trim applied. Trailing whitespace is left untouched.
pub fn strip_year_from_title(title: &str) -> String {
    YEAR_TOKEN.replacen(title, 1, "").trim_start().to_string()
}

/// Removes all literal parentheses from a year string.
///
/// Idempotent: re-applying to already-stripped text is a no-op.
pub fn strip_parens(year: &str) -> String {
    year.replace(['(', ')'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_year_removes_token() {
        assert_eq!(strip_year_from_title("Movie Name (1994)"), "Movie Name ");
    }

    #[test]
    fn test_strip_year_trims_leading_only() {
        assert_eq!(strip_year_from_title("  Movie Name (1994)"), "Movie Name ");
        assert_eq!(strip_year_from_title("  Movie Name  "), "Movie Name  ");
    }

    #[test]
    fn test_strip_year_first_occurrence_only() {
        assert_eq!(
            strip_year_from_title("1917 (2019) rerelease (2020)"),
            "1917  rerelease (2020)"
        );
    }

    #[test]
    fn test_strip_year_mid_string() {
        assert_eq!(strip_year_from_title("Movie (1994) Name"), "Movie  Name");
    }

    #[test]
    fn test_strip_year_ignores_partial_tokens() {
        assert_eq!(strip_year_from_title("(194) (19945)"), "(194) (19945)");
        assert_eq!(strip_year_from_title("1994"), "1994");
    }

    #[test]
    fn test_strip_year_empty_input() {
        assert_eq!(strip_year_from_title(""), "");
    }

    #[test]
    fn test_strip_parens() {
        assert_eq!(strip_parens("(1994)"), "1994");
        assert_eq!(strip_parens("1994"), "1994");
    }

    #[test]
    fn test_strip_parens_idempotent() {
        let once = strip_parens("((2001))");
        assert_eq!(once, "2001");
        assert_eq!(strip_parens(&once), once);
    }

    #[test]
    fn test_strip_parens_empty_input() {
        assert_eq!(strip_parens(""), "");
    }
}
