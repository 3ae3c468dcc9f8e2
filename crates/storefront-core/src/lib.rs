pub mod app;
pub mod error;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod review;
pub mod selectors;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::ExtractError;
pub use models::{App, DeviceValue, Review};
pub use parser::StorefrontParser;
pub use selectors::{AppSelectors, ReviewSelectors, SelectorSet};
pub use traits::{Document, DocumentLoader, Element};
