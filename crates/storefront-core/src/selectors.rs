//! CSS selectors binding each extracted field to the page layout.
//!
//! Defaults describe the storefront layout as served today. A layout change
//! can be absorbed by overriding single keys from a JSON file, without a
//! rebuild:
//!
//! ```json
//! { "app": { "score": "div.score-container > div.score" } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Environment variable naming a JSON selector override file.
pub const SELECTORS_ENV: &str = "STOREFRONT_SELECTORS";

/// Selectors for the app details page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSelectors {
    pub name: String,
    pub image: String,
    pub developer: String,
    pub dev_link: String,
    pub category: String,
    pub stars_count: String,
    pub bar_number: String,
    pub score: String,
    pub description: String,
    pub recent_change: String,
    pub date_published: String,
    pub file_size: String,
    pub num_downloads: String,
    pub software_version: String,
    pub operating_systems: String,
}

impl Default for AppSelectors {
    fn default() -> Self {
        Self {
            name: "div.document-title > div".into(),
            image: "img.cover-image".into(),
            developer: r#"a.document-subtitle.primary > span[itemprop="name"]"#.into(),
            dev_link: "a.dev-link".into(),
            category: "a.document-subtitle.category".into(),
            stars_count: "div.stars-count".into(),
            bar_number: "span.bar-number".into(),
            score: "div.score".into(),
            description: "div.id-app-orig-desc".into(),
            recent_change: "div.recent-change".into(),
            date_published: r#"div[itemprop="datePublished"]"#.into(),
            file_size: r#"div[itemprop="fileSize"]"#.into(),
            num_downloads: r#"div[itemprop="numDownloads"]"#.into(),
            software_version: r#"div[itemprop="softwareVersion"]"#.into(),
            operating_systems: r#"div[itemprop="operatingSystems"]"#.into(),
        }
    }
}

/// Selectors for the reviews page. All but `fragment` are scoped to a
/// single review fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewSelectors {
    pub fragment: String,
    pub permalink: String,
    pub author_name: String,
    pub author_link: String,
    pub date: String,
    pub current_rating: String,
    pub title: String,
    pub body: String,
}

impl Default for ReviewSelectors {
    fn default() -> Self {
        Self {
            fragment: ".single-review".into(),
            permalink: "a.reviews-permalink".into(),
            author_name: ".author-name".into(),
            author_link: "span.author-name > a".into(),
            date: "span.review-date".into(),
            current_rating: "div.current-rating".into(),
            title: ".review-title".into(),
            body: ".review-body".into(),
        }
    }
}

/// The full selector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSet {
    pub app: AppSelectors,
    pub review: ReviewSelectors,
}

impl SelectorSet {
    /// Parse a JSON override document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ExtractError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ExtractError::ConfigError(format!(
                "Failed to read selector file {}: {e}",
                path.display()
            ))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            ExtractError::ConfigError(format!(
                "Invalid JSON in selector file {}: {e}",
                path.display()
            ))
        })
    }

    /// Read configuration from the environment.
    ///
    /// - `STOREFRONT_SELECTORS` (optional): path to a JSON override file.
    ///   When unset the default layout is used.
    pub fn from_env() -> Result<Self, ExtractError> {
        match std::env::var(SELECTORS_ENV) {
            Err(_) => Ok(Self::default()),
            Ok(path) if path.trim().is_empty() => Ok(Self::default()),
            Ok(path) => {
                tracing::debug!(path = %path, "Loading selector overrides");
                Self::from_file(Path::new(path.trim()))
            }
        }
    }
}
