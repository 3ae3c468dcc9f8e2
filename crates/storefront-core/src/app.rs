//! Field extractors for the app details page.
//!
//! Each extractor reads one field from the document root. None depends on
//! another's result.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ExtractError;
use crate::models::{App, DeviceValue};
use crate::normalize::{
    contains_digit, first_digit_run, leading_float, leading_int, parse_date, version_run,
};
use crate::selectors::AppSelectors;
use crate::traits::Element;

lazy_static! {
    static ref CATEGORY_SLUG: Regex = Regex::new(r"category/(.+)$").unwrap();
}

/// Run every app extractor against `root` and assemble the record.
pub fn build_app<E: Element>(root: &E, selectors: &AppSelectors) -> Result<App, ExtractError> {
    let links = DevLinks::collect(root, selectors)?;

    Ok(App {
        name: name(root, selectors)?,
        image_url: image_url(root, selectors)?,
        developer: developer(root, selectors)?,
        developer_mail: links.mail(),
        developer_web: links.web(),
        category: category(root, selectors)?,
        rating_count: rating_count(root, selectors)?,
        rating_counts: rating_counts(root, selectors)?,
        rating_average: rating_average(root, selectors)?,
        description: description(root, selectors)?,
        recent_change: recent_change(root, selectors)?,
        last_update: last_update(root, selectors)?,
        file_size: file_size(root, selectors)?,
        downloads: downloads(root, selectors)?,
        version: version(root, selectors)?,
        os_required: os_required(root, selectors)?,
    })
}

fn required<E: Element>(root: &E, field: &'static str, selector: &str) -> Result<E, ExtractError> {
    root.query_one(selector)?
        .ok_or_else(|| ExtractError::missing(field, selector))
}

fn required_attr<E: Element>(
    root: &E,
    field: &'static str,
    selector: &str,
    attr: &str,
) -> Result<String, ExtractError> {
    required(root, field, selector)?
        .attr(attr)
        .ok_or_else(|| ExtractError::missing(field, selector))
}

/// Every match of a required selector, `MissingField` when there are none.
fn required_all<E: Element>(
    root: &E,
    field: &'static str,
    selector: &str,
) -> Result<Vec<E>, ExtractError> {
    let matches = root.query_all(selector)?;
    if matches.is_empty() {
        return Err(ExtractError::missing(field, selector));
    }
    Ok(matches)
}

/// Trimmed text of the first match, empty when nothing matches.
fn optional_text<E: Element>(root: &E, selector: &str) -> Result<String, ExtractError> {
    Ok(root
        .query_one(selector)?
        .map(|el| el.text().trim().to_string())
        .unwrap_or_default())
}

/// Text of every title match, concatenated and trimmed.
pub fn name<E: Element>(root: &E, s: &AppSelectors) -> Result<String, ExtractError> {
    let text: String = required_all(root, "name", &s.name)?
        .iter()
        .map(Element::text)
        .collect();
    Ok(text.trim().to_string())
}

pub fn image_url<E: Element>(root: &E, s: &AppSelectors) -> Result<String, ExtractError> {
    required_attr(root, "image_url", &s.image, "src")
}

pub fn developer<E: Element>(root: &E, s: &AppSelectors) -> Result<String, ExtractError> {
    Ok(required(root, "developer", &s.developer)?.text().trim().to_string())
}

/// The developer contact anchors, in document order.
///
/// The page renders either a single mail link, or a website link followed
/// by a mail link. Which is which is decided purely by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevLinks {
    hrefs: Vec<Option<String>>,
}

impl DevLinks {
    pub fn collect<E: Element>(root: &E, s: &AppSelectors) -> Result<Self, ExtractError> {
        let hrefs = root
            .query_all(&s.dev_link)?
            .iter()
            .map(|a| a.attr("href"))
            .collect();
        Ok(Self { hrefs })
    }

    /// First link, only when exactly two are present.
    pub fn web(&self) -> Option<String> {
        match self.hrefs.as_slice() {
            [web, _mail] => web.clone(),
            _ => None,
        }
    }

    /// Last link with any `mailto:` prefix removed.
    pub fn mail(&self) -> Option<String> {
        let href = self.hrefs.last()?.as_deref()?;
        Some(href.strip_prefix("mailto:").unwrap_or(href).to_string())
    }
}

pub fn developer_web<E: Element>(
    root: &E,
    s: &AppSelectors,
) -> Result<Option<String>, ExtractError> {
    Ok(DevLinks::collect(root, s)?.web())
}

pub fn developer_mail<E: Element>(
    root: &E,
    s: &AppSelectors,
) -> Result<Option<String>, ExtractError> {
    Ok(DevLinks::collect(root, s)?.mail())
}

pub fn category<E: Element>(root: &E, s: &AppSelectors) -> Result<String, ExtractError> {
    let href = required_attr(root, "category", &s.category, "href")?;
    CATEGORY_SLUG
        .captures(&href)
        .map(|caps| caps[1].to_lowercase())
        .ok_or_else(|| ExtractError::missing("category", &s.category))
}

pub fn rating_count<E: Element>(root: &E, s: &AppSelectors) -> Result<String, ExtractError> {
    let text = required(root, "rating_count", &s.stars_count)?.text();
    first_digit_run(&text)
        .map(str::to_string)
        .ok_or_else(|| ExtractError::missing("rating_count", &s.stars_count))
}

pub fn rating_counts<E: Element>(root: &E, s: &AppSelectors) -> Result<Vec<i64>, ExtractError> {
    Ok(root
        .query_all(&s.bar_number)?
        .iter()
        .map(|bar| leading_int(&bar.text()))
        .collect())
}

pub fn rating_average<E: Element>(root: &E, s: &AppSelectors) -> Result<f64, ExtractError> {
    Ok(leading_float(&optional_text(root, &s.score)?))
}

/// Inner markup of every description block, concatenated untouched.
pub fn description<E: Element>(root: &E, s: &AppSelectors) -> Result<String, ExtractError> {
    Ok(required_all(root, "description", &s.description)?
        .iter()
        .map(Element::inner_markup)
        .collect())
}

pub fn recent_change<E: Element>(root: &E, s: &AppSelectors) -> Result<String, ExtractError> {
    let lines: Vec<String> = root
        .query_all(&s.recent_change)?
        .iter()
        .map(Element::text)
        .collect();
    Ok(lines.join("\n"))
}

pub fn last_update<E: Element>(
    root: &E,
    s: &AppSelectors,
) -> Result<chrono::NaiveDate, ExtractError> {
    parse_date(&required(root, "last_update", &s.date_published)?.text())
}

fn device_value(field: &'static str, text: String) -> DeviceValue {
    if contains_digit(&text) {
        DeviceValue::Known(text)
    } else {
        tracing::debug!(field, text = %text, "No digits, treating as device dependent");
        DeviceValue::DeviceDependent
    }
}

pub fn file_size<E: Element>(root: &E, s: &AppSelectors) -> Result<DeviceValue, ExtractError> {
    Ok(device_value("file_size", optional_text(root, &s.file_size)?))
}

pub fn downloads<E: Element>(root: &E, s: &AppSelectors) -> Result<String, ExtractError> {
    Ok(required(root, "downloads", &s.num_downloads)?.text().trim().to_string())
}

pub fn version<E: Element>(root: &E, s: &AppSelectors) -> Result<DeviceValue, ExtractError> {
    Ok(device_value("version", optional_text(root, &s.software_version)?))
}

pub fn os_required<E: Element>(root: &E, s: &AppSelectors) -> Result<DeviceValue, ExtractError> {
    let text = optional_text(root, &s.operating_systems)?;
    Ok(match version_run(&text) {
        Some(run) => DeviceValue::Known(run.to_string()),
        None => device_value("os_required", text),
    })
}
