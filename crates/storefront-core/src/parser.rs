use crate::app::build_app;
use crate::error::ExtractError;
use crate::models::{App, Review};
use crate::review::build_reviews;
use crate::selectors::SelectorSet;
use crate::traits::{Document, DocumentLoader};

/// Builds records from storefront HTML: load → extract every field → assemble.
///
/// Generic over the document loader, so the extraction rules never touch a
/// concrete HTML library.
#[derive(Clone)]
pub struct StorefrontParser<L: DocumentLoader> {
    loader: L,
    selectors: SelectorSet,
}

impl<L: DocumentLoader> StorefrontParser<L> {
    /// Create a parser using the default page layout.
    pub fn new(loader: L) -> Self {
        Self::with_selectors(loader, SelectorSet::default())
    }

    pub fn with_selectors(loader: L, selectors: SelectorSet) -> Self {
        Self { loader, selectors }
    }

    pub fn selectors(&self) -> &SelectorSet {
        &self.selectors
    }

    /// Extract the app record from a details page.
    pub fn parse_app(&self, html: &str) -> Result<App, ExtractError> {
        let doc = self.loader.load(html)?;
        self.app_from(&doc)
    }

    pub fn parse_app_bytes(&self, bytes: &[u8]) -> Result<App, ExtractError> {
        let doc = self.loader.load_bytes(bytes)?;
        self.app_from(&doc)
    }

    /// Extract every review on a reviews page, in document order.
    ///
    /// A page without review fragments yields an empty list.
    pub fn parse_reviews(&self, html: &str) -> Result<Vec<Review>, ExtractError> {
        let doc = self.loader.load(html)?;
        self.reviews_from(&doc)
    }

    pub fn parse_reviews_bytes(&self, bytes: &[u8]) -> Result<Vec<Review>, ExtractError> {
        let doc = self.loader.load_bytes(bytes)?;
        self.reviews_from(&doc)
    }

    fn app_from(&self, doc: &L::Document) -> Result<App, ExtractError> {
        let app = build_app(&doc.root(), &self.selectors.app)?;
        tracing::info!(
            name = %app.name,
            category = %app.category,
            version = %app.version,
            "Extracted app"
        );
        Ok(app)
    }

    fn reviews_from(&self, doc: &L::Document) -> Result<Vec<Review>, ExtractError> {
        let reviews = build_reviews(&doc.root(), &self.selectors.review)?;
        tracing::info!(count = reviews.len(), "Extracted reviews");
        Ok(reviews)
    }
}
