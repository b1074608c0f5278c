//! Percentage-token extraction from free-form rate descriptions
//!
//! Catalog rate schedules arrive as descriptive strings written for humans,
//! e.g. `"15%"` or `"26% (Y1), 22.5% (Y2), 19% (Y3)"`. Everything the engine
//! knows about a schedule is recovered from those strings here.

use regex::Regex;
use std::sync::LazyLock;

/// A numeric token (integer or decimal) immediately followed by `%`
static PERCENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").expect("percent token regex"));

/// The first signed numeric token inside a decorated value
static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("numeric token regex"));

/// Extract every percentage figure from a rate description, in order of
/// appearance.
///
/// Returns an empty vector when the text carries no `N%` token. Numbers not
/// immediately followed by `%` (year markers, currency amounts) are ignored.
/// Never fails.
pub fn extract_rates(text: &str) -> Vec<f64> {
    PERCENT_TOKEN
        .captures_iter(text)
        .filter_map(|cap| cap[1].parse().ok())
        .collect()
}

/// Arithmetic mean of the extracted percentage figures.
///
/// A description with no recognizable rate averages to `0.0`; malformed
/// reference data degrades to a zero estimate rather than an error.
pub fn average_rate(text: &str) -> f64 {
    let rates = extract_rates(text);
    if rates.is_empty() {
        return 0.0;
    }
    rates.iter().sum::<f64>() / rates.len() as f64
}

/// True when the description carries more than one rate figure, i.e. the
/// schedule is staged (time-varying).
pub fn is_staged(text: &str) -> bool {
    extract_rates(text).len() > 1
}

/// Parse a possibly decorated numeric value: `"20%"`, `"1,000 EGP"`, `"1500"`.
///
/// Thousands separators are dropped and the first numeric token wins; any
/// trailing `%` or currency text is ignored. Returns `None` when the input
/// carries no number at all.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    NUMERIC_TOKEN
        .find(&cleaned)
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_rate() {
        assert_eq!(extract_rates("15%"), vec![15.0]);
    }

    #[test]
    fn test_extract_staged_rates_in_order() {
        assert_eq!(
            extract_rates("20% (Y1), 15% (Y2), 10% (Y3)"),
            vec![20.0, 15.0, 10.0]
        );
    }

    #[test]
    fn test_extract_decimal_rates() {
        assert_eq!(
            extract_rates("26% (Y1), 22.5% (Y2), 19% (Y3)"),
            vec![26.0, 22.5, 19.0]
        );
    }

    #[test]
    fn test_extract_ignores_text_without_rates() {
        assert!(extract_rates("No rates").is_empty());
    }

    #[test]
    fn test_extract_ignores_plain_numbers() {
        // Year markers and currency figures carry no % and must not count
        assert_eq!(extract_rates("12.5% on amounts above 1000 EGP"), vec![12.5]);
        assert!(extract_rates("minimum 1000, multiples of 500").is_empty());
    }

    #[test]
    fn test_average_single() {
        assert_eq!(average_rate("15%"), 15.0);
    }

    #[test]
    fn test_average_staged() {
        assert_eq!(average_rate("20% (Y1), 15% (Y2), 10% (Y3)"), 15.0);
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average_rate("No rates"), 0.0);
        assert_eq!(average_rate(""), 0.0);
    }

    #[test]
    fn test_is_staged() {
        assert!(!is_staged("15%"));
        assert!(is_staged("20% (Y1), 15% (Y2)"));
        assert!(!is_staged("No rates"));
    }

    #[test]
    fn test_parse_numeric_strips_decoration() {
        assert_eq!(parse_numeric("20%"), Some(20.0));
        assert_eq!(parse_numeric("22.5%"), Some(22.5));
        assert_eq!(parse_numeric("1,000 EGP"), Some(1000.0));
        assert_eq!(parse_numeric("1500"), Some(1500.0));
        assert_eq!(parse_numeric("-5"), Some(-5.0));
    }

    #[test]
    fn test_parse_numeric_rejects_non_numbers() {
        assert_eq!(parse_numeric("n/a"), None);
        assert_eq!(parse_numeric(""), None);
    }
}
