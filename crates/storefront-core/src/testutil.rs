//! Test utilities: mock implementations of the document traits.
//!
//! A `MockElement` answers queries from a table keyed by the exact selector
//! string, so extractor tests can describe a page without any HTML.

use std::collections::HashMap;

use crate::error::ExtractError;
use crate::selectors::SelectorSet;
use crate::traits::{Document, DocumentLoader, Element};

// ---------------------------------------------------------------------------
// MockElement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct MockElement {
    text: String,
    markup: String,
    attrs: HashMap<String, String>,
    children: HashMap<String, Vec<MockElement>>,
}

impl MockElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_node(text: &str) -> Self {
        Self::new().with_text(text)
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_markup(mut self, markup: &str) -> Self {
        self.markup = markup.to_string();
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Register `child` as a match for `selector`. Repeated calls append,
    /// preserving document order.
    pub fn with_child(mut self, selector: &str, child: MockElement) -> Self {
        self.children
            .entry(selector.to_string())
            .or_default()
            .push(child);
        self
    }
}

impl Element for MockElement {
    fn query_all(&self, selector: &str) -> Result<Vec<Self>, ExtractError> {
        if selector.is_empty() {
            return Err(ExtractError::InvalidSelector {
                selector: selector.to_string(),
                message: "empty selector".into(),
            });
        }
        Ok(self.children.get(selector).cloned().unwrap_or_default())
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }

    fn inner_markup(&self) -> String {
        self.markup.clone()
    }
}

// ---------------------------------------------------------------------------
// MockDocument / MockLoader
// ---------------------------------------------------------------------------

pub struct MockDocument {
    root: MockElement,
}

impl Document for MockDocument {
    type Element<'a>
        = MockElement
    where
        Self: 'a;

    fn root(&self) -> MockElement {
        self.root.clone()
    }
}

/// Loader that ignores its input and always yields the configured tree.
#[derive(Clone)]
pub struct MockLoader {
    root: MockElement,
}

impl MockLoader {
    pub fn new(root: MockElement) -> Self {
        Self { root }
    }
}

impl DocumentLoader for MockLoader {
    type Document = MockDocument;

    fn load(&self, _html: &str) -> Result<MockDocument, ExtractError> {
        Ok(MockDocument {
            root: self.root.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A complete app page using the default selectors.
pub fn app_page() -> MockElement {
    let s = SelectorSet::default().app;
    MockElement::new()
        .with_child(&s.name, MockElement::text_node("  Example App \n"))
        .with_child(
            &s.image,
            MockElement::new().with_attr("src", "//lh3.example.com/icon.png"),
        )
        .with_child(&s.developer, MockElement::text_node("Example Studio"))
        .with_child(
            &s.dev_link,
            MockElement::new().with_attr("href", "https://example.com"),
        )
        .with_child(
            &s.dev_link,
            MockElement::new().with_attr("href", "mailto:dev@example.com"),
        )
        .with_child(
            &s.category,
            MockElement::new().with_attr("href", "/store/apps/category/GAME_ACTION"),
        )
        .with_child(&s.stars_count, MockElement::text_node(" ( 12345 ) "))
        .with_child(&s.bar_number, MockElement::text_node("9000"))
        .with_child(&s.bar_number, MockElement::text_node("2000"))
        .with_child(&s.bar_number, MockElement::text_node("800"))
        .with_child(&s.bar_number, MockElement::text_node("300"))
        .with_child(&s.bar_number, MockElement::text_node("245"))
        .with_child(&s.score, MockElement::text_node("4.5"))
        .with_child(
            &s.description,
            MockElement::new()
                .with_text("Shoot things.")
                .with_markup("<p>Shoot <b>things</b>.</p>"),
        )
        .with_child(&s.recent_change, MockElement::text_node("Bug fixes"))
        .with_child(&s.recent_change, MockElement::text_node("New levels"))
        .with_child(&s.date_published, MockElement::text_node("March 5, 2020"))
        .with_child(&s.file_size, MockElement::text_node(" 24M "))
        .with_child(&s.num_downloads, MockElement::text_node(" 10,000 - 50,000 "))
        .with_child(&s.software_version, MockElement::text_node(" 1.2.3 "))
        .with_child(
            &s.operating_systems,
            MockElement::text_node("Requires Android 4.1 and up"),
        )
}

/// A review fragment using the default selectors.
pub fn review_fragment(width: &str) -> MockElement {
    let s = SelectorSet::default().review;
    MockElement::new()
        .with_child(
            &s.permalink,
            MockElement::new().with_attr("href", "/store/apps/details?id=com.example&reviewId=abc123"),
        )
        .with_child(&s.author_name, MockElement::text_node(" Jane Doe "))
        .with_child(
            &s.author_link,
            MockElement::new().with_attr("href", "/store/people/details?id=104592345678901234567"),
        )
        .with_child(&s.date, MockElement::text_node("March 5, 2020"))
        .with_child(
            &s.current_rating,
            MockElement::new().with_attr("style", &format!("width: {width}%;")),
        )
        .with_child(&s.title, MockElement::text_node(" Great "))
        .with_child(&s.body, MockElement::text_node("  Great game, would play again. "))
}
