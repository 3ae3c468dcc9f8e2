use crate::error::ExtractError;

/// A node in a parsed HTML tree, queryable with CSS selectors.
///
/// Extractors only ever see this interface, never the underlying HTML
/// library's types.
pub trait Element: Sized {
    /// All descendants matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self>, ExtractError>;

    /// The first descendant matching `selector`.
    fn query_one(&self, selector: &str) -> Result<Option<Self>, ExtractError> {
        Ok(self.query_all(selector)?.into_iter().next())
    }

    /// Concatenated text of all descendant text nodes.
    fn text(&self) -> String;

    fn attr(&self, name: &str) -> Option<String>;

    /// Serialized markup of the element's children.
    fn inner_markup(&self) -> String;
}

/// A parsed HTML document.
pub trait Document {
    type Element<'a>: Element
    where
        Self: 'a;

    /// The element absolute queries are run from.
    fn root(&self) -> Self::Element<'_>;
}

/// Turns raw HTML into a [`Document`].
///
/// Loading is lenient: malformed markup still yields a (possibly empty) tree.
pub trait DocumentLoader: Send + Sync + Clone {
    type Document: Document;

    fn load(&self, html: &str) -> Result<Self::Document, ExtractError>;

    /// Load from raw bytes. Fails with [`ExtractError::MalformedInput`] when
    /// the bytes are not UTF-8 text.
    fn load_bytes(&self, bytes: &[u8]) -> Result<Self::Document, ExtractError> {
        let html =
            std::str::from_utf8(bytes).map_err(|e| ExtractError::MalformedInput(e.to_string()))?;
        self.load(html)
    }
}
