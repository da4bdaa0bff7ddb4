//! Error Types
//!
//! Failures of the menu pipeline. None of them is fatal to the page.

use thiserror::Error;

pub type MenuResult<T> = Result<T, MenuError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    /// Network failure or non-success HTTP status
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Catalog body is not a list of menu items
    #[error("failed to parse catalog: {0}")]
    Parse(String),

    /// A shared widget is not mounted on the page
    #[error("missing element: {0}")]
    MissingElement(&'static str),
}

impl From<serde_json::Error> for MenuError {
    fn from(e: serde_json::Error) -> Self {
        MenuError::Parse(e.to_string())
    }
}
