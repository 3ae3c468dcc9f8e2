pub mod loader;

pub use loader::{ScraperDocument, ScraperElement, ScraperLoader};

use storefront_core::{App, ExtractError, Review, StorefrontParser};

/// A parser over the default page layout.
pub fn parser() -> StorefrontParser<ScraperLoader> {
    StorefrontParser::new(ScraperLoader::new())
}

/// Extract the app record from a details page using the default selectors.
pub fn parse_app(html: &str) -> Result<App, ExtractError> {
    parser().parse_app(html)
}

/// Extract all reviews from a reviews page using the default selectors.
pub fn parse_reviews(html: &str) -> Result<Vec<Review>, ExtractError> {
    parser().parse_reviews(html)
}
