use scraper::{ElementRef, Html, Selector};
use storefront_core::error::ExtractError;
use storefront_core::traits::{Document, DocumentLoader, Element};

/// Lenient HTML loader backed by scraper (html5ever).
///
/// Never fails on bad markup: missing end tags, stray text and unknown
/// elements are repaired the way a browser would.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperLoader;

impl ScraperLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentLoader for ScraperLoader {
    type Document = ScraperDocument;

    fn load(&self, html: &str) -> Result<ScraperDocument, ExtractError> {
        let html = Html::parse_document(html);
        if !html.errors.is_empty() {
            tracing::debug!(errors = html.errors.len(), "Recovered from HTML parse errors");
        }
        Ok(ScraperDocument { html })
    }
}

/// A parsed page.
pub struct ScraperDocument {
    html: Html,
}

impl Document for ScraperDocument {
    type Element<'a>
        = ScraperElement<'a>
    where
        Self: 'a;

    fn root(&self) -> ScraperElement<'_> {
        ScraperElement(self.html.root_element())
    }
}

/// A borrowed element of a [`ScraperDocument`].
#[derive(Debug, Clone, Copy)]
pub struct ScraperElement<'a>(ElementRef<'a>);

fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

impl Element for ScraperElement<'_> {
    fn query_all(&self, selector: &str) -> Result<Vec<Self>, ExtractError> {
        let selector = parse_selector(selector)?;
        Ok(self.0.select(&selector).map(ScraperElement).collect())
    }

    fn query_one(&self, selector: &str) -> Result<Option<Self>, ExtractError> {
        let selector = parse_selector(selector)?;
        Ok(self.0.select(&selector).next().map(ScraperElement))
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }

    fn inner_markup(&self) -> String {
        self.0.inner_html()
    }
}
