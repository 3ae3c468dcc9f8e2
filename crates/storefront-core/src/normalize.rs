//! Shared text normalization: date parsing and lenient numeric coercion.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ExtractError;

/// Formats tried, in order, at every word start before falling back to the
/// numeric pattern.
const DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%A, %B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d/%m/%Y",
    "%d.%m.%Y",
];

lazy_static! {
    static ref THREE_NUMBERS: Regex = Regex::new(r"(\d+)\D+(\d+)\D+(\d+)").unwrap();
    static ref ORDINAL_SUFFIX: Regex = Regex::new(r"(\d)(?:st|nd|rd|th)\b").unwrap();
    static ref ABBREVIATION_DOT: Regex = Regex::new(r"\b([A-Za-z]{3,9})\.").unwrap();
    static ref LEADING_INT: Regex = Regex::new(r"^\s*([+-]?\d+)").unwrap();
    static ref LEADING_FLOAT: Regex =
        Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:[eE][+-]?\d+)?)").unwrap();
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();
    static ref VERSION_RUN: Regex = Regex::new(r"[\d.]*\d[\d.]*").unwrap();
}

/// Parse a date as rendered on the page.
///
/// Known textual formats are searched for anywhere in the text, so
/// `Updated March 5th, 2020` and `Mar. 5, 2020` both parse. Failing those,
/// the first three numeric groups are taken in textual order as year, month,
/// day. The fallback does not reorder groups, so `build 5 of 3 in 2020` is
/// year 5, month 3, day 2020, which is not a date.
pub fn parse_date(text: &str) -> Result<NaiveDate, ExtractError> {
    let trimmed = text.trim();

    if let Some(date) = find_textual_date(trimmed) {
        return Ok(date);
    }

    tracing::debug!(text = trimmed, "Date format not recognized, using numeric fallback");

    let invalid = || ExtractError::InvalidDate {
        text: trimmed.to_string(),
    };

    let caps = THREE_NUMBERS.captures(trimmed).ok_or_else(invalid)?;
    let year: i32 = caps[1].parse().map_err(|_| invalid())?;
    let month: u32 = caps[2].parse().map_err(|_| invalid())?;
    let day: u32 = caps[3].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// First date matching a known format that starts at a word boundary.
///
/// A match must not stop in the middle of a number: `5/3/2020` is not read
/// as `%Y/%m/%d` with day `20` and a leftover `20`.
fn find_textual_date(text: &str) -> Option<NaiveDate> {
    let text = ORDINAL_SUFFIX.replace_all(text, "$1");
    let text = ABBREVIATION_DOT.replace_all(&text, "$1");

    word_starts(&text).find_map(|start| {
        let tail = &text[start..];
        DATE_FORMATS.iter().find_map(|fmt| {
            let (date, rest) = NaiveDate::parse_and_remainder(tail, fmt).ok()?;
            let split_number = rest.starts_with(|c: char| c.is_ascii_digit());
            (!split_number).then_some(date)
        })
    })
}

fn word_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    let mut prev: Option<char> = None;
    text.char_indices().filter_map(move |(idx, c)| {
        let starts = c.is_alphanumeric() && !prev.is_some_and(char::is_alphanumeric);
        prev = Some(c);
        starts.then_some(idx)
    })
}

/// Integer value of the leading digits, `0` when there are none.
pub fn leading_int(text: &str) -> i64 {
    LEADING_INT
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Float value of the leading number, `0.0` when there is none.
pub fn leading_float(text: &str) -> f64 {
    LEADING_FLOAT
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0.0)
}

/// The first run of ASCII digits anywhere in `text`.
pub fn first_digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN.find(text).map(|m| m.as_str())
}

pub fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// The first run of digits and dots that contains at least one digit.
pub fn version_run(text: &str) -> Option<&str> {
    VERSION_RUN.find(text).map(|m| m.as_str())
}
