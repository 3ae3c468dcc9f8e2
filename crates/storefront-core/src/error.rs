use thiserror::Error;

/// Error types for storefront extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input could not be read as text at all.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A field whose presence a valid page guarantees matched no node.
    #[error("Missing field '{field}' (selector: {selector})")]
    MissingField {
        field: &'static str,
        selector: String,
    },

    /// Neither the date parser nor the numeric fallback produced a calendar date.
    #[error("Invalid date: {text:?}")]
    InvalidDate { text: String },

    /// A configured selector is not valid CSS.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// Selector configuration could not be loaded.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ExtractError {
    pub(crate) fn missing(field: &'static str, selector: &str) -> Self {
        ExtractError::MissingField {
            field,
            selector: selector.to_string(),
        }
    }

    /// Returns true if this error means the page no longer has the expected shape.
    ///
    /// These are the failures worth surfacing as "extractor needs updating";
    /// retrying the same page will fail the same way.
    pub fn is_layout_change(&self) -> bool {
        matches!(
            self,
            ExtractError::MissingField { .. } | ExtractError::InvalidDate { .. }
        )
    }
}
