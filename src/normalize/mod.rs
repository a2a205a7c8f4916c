//! # Text Normalizers
//!
//! Pure functions that turn the free-form prose found on dinosaur profile
//! pages into the structured field shapes the rest of the pipeline expects:
//!
//! - [`clean_historical_period`]: strip parenthetical date ranges
//! - [`is_valid_measurements`] / [`split_size_and_weight`]: gate and split
//!   the combined "length and weight" string
//! - [`format_length`] / [`format_weight`]: reduce a measurement phrase to
//!   `"<value> <unit>"`
//!
//! None of these touch the network or the DOM; they operate on text already
//! pulled out of a page and are deliberately tolerant of sloppy source
//! prose.

mod words;

use std::sync::LazyLock;

use regex::Regex;

pub use words::words_to_numbers;

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("hard-coded regex"));

static LONG_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+long$").expect("hard-coded regex"));

static LENGTH_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(About|Up to)\s+").expect("hard-coded regex"));

static LENGTH_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(foot|feet|inches)\b").expect("hard-coded regex"));

static WEIGHT_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(pounds|tons|ounces)\b").expect("hard-coded regex"));

/// Qualitative weight values that stay verbatim: "half a ton", "a few tons",
/// "less than a pound".
static QUALITATIVE_WEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)half|few|less").expect("hard-coded regex"));

/// Remove every parenthesized substring (and its surrounding whitespace)
/// from a historical period description.
///
/// `"Late Jurassic (152 to 145 million years ago)"` becomes
/// `"Late Jurassic"`. Text without parentheses passes through untouched, so
/// the function is idempotent.
pub fn clean_historical_period(text: &str) -> String {
    PARENTHETICAL.replace_all(text, "").trim().to_string()
}

/// Check that a combined size-and-weight string is well-formed enough to
/// split: it must contain the `"and"` separator and must not carry the
/// source's `"Unknown"` placeholder.
///
/// This is the sole eligibility gate for an entry; callers skip the whole
/// container when it fails.
pub fn is_valid_measurements(text: &str) -> bool {
    !text.contains("Unknown") && text.contains("and")
}

/// Split a combined `"<length> and <weight>"` string into its trimmed
/// halves.
///
/// Splits on the first literal `"and"`; the weight half is everything
/// between the first and second occurrence when more than one is present.
/// Callers are expected to have validated the string with
/// [`is_valid_measurements`] first; without a separator the weight half
/// comes back empty.
pub fn split_size_and_weight(text: &str) -> (String, String) {
    let mut parts = text.split("and");
    let length = parts.next().unwrap_or("").trim().to_string();
    let weight = parts.next().unwrap_or("").trim().to_string();
    (length, weight)
}

/// Format a dinosaur length phrase as `"<value> <unit>"`.
///
/// Strips a trailing `"long"` and a leading `"About "`/`"Up to "`, detects
/// the first `foot|feet|inches` unit token (case preserved from the
/// source), and leaves already-numeric values alone - ranges like `"20-25"`
/// are not resolved here. Pure word values are converted to digits with
/// fuzzy number-word matching, so `"twenty-five feet"` becomes `"25 feet"`.
/// When no unit is found the unit half is empty.
pub fn format_length(text: &str) -> String {
    let text = LONG_SUFFIX.replace(text, "");
    let text = LENGTH_PREFIX.replace(text.trim(), "");
    let text = text.trim();

    let unit = LENGTH_UNIT
        .find(text)
        .map(|m| m.as_str())
        .unwrap_or_default();
    let value = LENGTH_UNIT.replace(text, "");
    let value = value.trim();

    if value.contains(|c: char| c.is_ascii_digit()) {
        return format!("{value} {unit}");
    }

    format!("{} {}", words_to_numbers(value, true), unit)
}

/// Format a dinosaur weight phrase as `"<value> <unit>"`.
///
/// Same shape as [`format_length`] with the `pounds|tons|ounces` unit set.
/// Qualitative values (`half`, `few`, `less`) are kept verbatim rather than
/// converted, and number-word conversion is strict here - a misspelled
/// number word passes through unchanged.
pub fn format_weight(text: &str) -> String {
    let unit = WEIGHT_UNIT
        .find(text)
        .map(|m| m.as_str())
        .unwrap_or_default();
    let value = WEIGHT_UNIT.replace(text, "");
    let value = value.trim();

    if value.contains(|c: char| c.is_ascii_digit()) {
        return format!("{value} {unit}");
    }

    if QUALITATIVE_WEIGHT.is_match(value) {
        return format!("{value} {unit}").trim().to_string();
    }

    format!("{} {}", words_to_numbers(value, false), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_historical_period_strips_parentheticals() {
        assert_eq!(
            clean_historical_period("Late Jurassic (152 to 145 million years ago)"),
            "Late Jurassic"
        );
        assert_eq!(
            clean_historical_period("Middle (or possibly Late) Cretaceous"),
            "MiddleCretaceous"
        );
    }

    #[test]
    fn test_clean_historical_period_no_parentheses() {
        assert_eq!(clean_historical_period("Late Cretaceous"), "Late Cretaceous");
    }

    #[test]
    fn test_clean_historical_period_idempotent() {
        let once = clean_historical_period("Early Triassic (250 million years ago)");
        assert_eq!(clean_historical_period(&once), once);
    }

    #[test]
    fn test_is_valid_measurements() {
        assert!(is_valid_measurements("40 feet and 7 tons"));
        assert!(!is_valid_measurements("40 feet and Unknown"));
        assert!(!is_valid_measurements("Unknown"));
        assert!(!is_valid_measurements("40 feet, 7 tons"));
    }

    #[test]
    fn test_split_size_and_weight() {
        assert_eq!(
            split_size_and_weight("40 feet and 7 tons"),
            ("40 feet".to_string(), "7 tons".to_string())
        );
    }

    #[test]
    fn test_split_without_separator_yields_empty_weight() {
        assert_eq!(
            split_size_and_weight("40 feet"),
            ("40 feet".to_string(), String::new())
        );
    }

    #[test]
    fn test_format_length_numeric() {
        assert_eq!(format_length("About 40 feet long"), "40 feet");
        assert_eq!(format_length("Up to 25 feet long"), "25 feet");
    }

    #[test]
    fn test_format_length_range_untouched() {
        assert_eq!(format_length("20-25 feet long"), "20-25 feet");
    }

    #[test]
    fn test_format_length_word_values() {
        assert_eq!(format_length("twenty-five feet"), "25 feet");
        assert_eq!(format_length("forty feet long"), "40 feet");
    }

    #[test]
    fn test_format_length_unit_case_preserved() {
        assert_eq!(format_length("About 10 Feet long"), "10 Feet");
    }

    #[test]
    fn test_format_length_no_unit_keeps_trailing_space() {
        assert_eq!(format_length("About 40"), "40 ");
    }

    #[test]
    fn test_format_weight_numeric() {
        assert_eq!(format_weight("2 tons"), "2 tons");
        assert_eq!(format_weight("500 pounds"), "500 pounds");
    }

    #[test]
    fn test_format_weight_qualitative_preserved() {
        assert_eq!(format_weight("a few tons"), "a few tons");
        // "ton" is not in the unit set; the qualitative branch trims the
        // empty unit away
        assert_eq!(format_weight("half a ton"), "half a ton");
        assert_eq!(format_weight("less than one pound ounces"), "less than one pound ounces");
    }

    #[test]
    fn test_format_weight_word_values_strict() {
        assert_eq!(format_weight("two tons"), "2 tons");
    }
}
