//! Review fragment locator and per-fragment field extractors.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ExtractError;
use crate::models::Review;
use crate::normalize::parse_date;
use crate::selectors::ReviewSelectors;
use crate::traits::Element;

/// Display name used when a review carries no author.
pub const UNKNOWN_USER: &str = "Unknown";

lazy_static! {
    static ref REVIEW_ID: Regex = Regex::new(r"reviewId=(\w+)").unwrap();
    static ref USER_ID: Regex = Regex::new(r"id=(\w+)").unwrap();
    static ref WIDTH_PERCENT: Regex = Regex::new(r"width:\s*(\d+)%").unwrap();
    static ref LEADING_DIGITS: Regex = Regex::new(r"^\d+").unwrap();
}

/// Build one review per fragment, in document order.
pub fn build_reviews<E: Element>(
    root: &E,
    selectors: &ReviewSelectors,
) -> Result<Vec<Review>, ExtractError> {
    let fragments = root.query_all(&selectors.fragment)?;
    tracing::debug!(count = fragments.len(), "Located review fragments");

    fragments
        .iter()
        .map(|fragment| build_review(fragment, selectors))
        .collect()
}

/// Run every review extractor against a single fragment.
pub fn build_review<E: Element>(
    fragment: &E,
    selectors: &ReviewSelectors,
) -> Result<Review, ExtractError> {
    Ok(Review {
        id: id(fragment, selectors)?,
        user: user(fragment, selectors)?,
        user_id: user_id(fragment, selectors)?,
        date: date(fragment, selectors)?,
        rating: rating(fragment, selectors)?,
        title: title(fragment, selectors)?,
        text: text(fragment, selectors)?,
    })
}

pub fn id<E: Element>(fragment: &E, s: &ReviewSelectors) -> Result<String, ExtractError> {
    let href = fragment
        .query_one(&s.permalink)?
        .and_then(|a| a.attr("href"))
        .ok_or_else(|| ExtractError::missing("id", &s.permalink))?;

    REVIEW_ID
        .captures(&href)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| ExtractError::missing("id", &s.permalink))
}

pub fn user<E: Element>(fragment: &E, s: &ReviewSelectors) -> Result<String, ExtractError> {
    Ok(match fragment.query_one(&s.author_name)? {
        Some(el) => el.text().trim().to_string(),
        None => UNKNOWN_USER.to_string(),
    })
}

/// Numeric account id from the author link.
///
/// `None` only when there is no author link or it carries no `id=` token.
/// A token without leading digits is `Some(0)`.
pub fn user_id<E: Element>(
    fragment: &E,
    s: &ReviewSelectors,
) -> Result<Option<u128>, ExtractError> {
    let Some(href) = fragment.query_one(&s.author_link)?.and_then(|a| a.attr("href")) else {
        return Ok(None);
    };

    Ok(USER_ID.captures(&href).map(|caps| {
        LEADING_DIGITS
            .find(&caps[1])
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }))
}

/// Review date from the text of every date node, joined in document order.
pub fn date<E: Element>(
    fragment: &E,
    s: &ReviewSelectors,
) -> Result<chrono::NaiveDate, ExtractError> {
    let text: String = fragment
        .query_all(&s.date)?
        .iter()
        .map(|el| el.text())
        .collect();
    parse_date(&text)
}

/// Star rating from the inline width of the rating bar: 20% per star,
/// truncated.
pub fn rating<E: Element>(fragment: &E, s: &ReviewSelectors) -> Result<u8, ExtractError> {
    let style = fragment
        .query_one(&s.current_rating)?
        .and_then(|div| div.attr("style"))
        .ok_or_else(|| ExtractError::missing("rating", &s.current_rating))?;

    let digits = WIDTH_PERCENT
        .captures(&style)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| ExtractError::missing("rating", &s.current_rating))?;
    // Digit runs too long for u64 are still a full bar.
    let width = digits.parse::<u64>().unwrap_or(u64::MAX);

    Ok(stars_from_width(width))
}

pub fn stars_from_width(width: u64) -> u8 {
    // Never more than 5 stars even if the bar overflows.
    (width / 20).min(5) as u8
}

pub fn title<E: Element>(fragment: &E, s: &ReviewSelectors) -> Result<String, ExtractError> {
    trimmed_or_empty(fragment, &s.title)
}

pub fn text<E: Element>(fragment: &E, s: &ReviewSelectors) -> Result<String, ExtractError> {
    trimmed_or_empty(fragment, &s.body)
}

fn trimmed_or_empty<E: Element>(fragment: &E, selector: &str) -> Result<String, ExtractError> {
    Ok(fragment
        .query_one(selector)?
        .map(|el| el.text().trim().to_string())
        .unwrap_or_default())
}
