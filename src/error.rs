//! Error type shared by the loaders and controllers.
//!
//! ERROR HANDLING
//! ==============
//! Markup contract violations (`MissingElement`, `UnexpectedElement`) surface
//! at mount time and are meant to be loud. Load failures (`Fetch`,
//! `HttpStatus`, `Parse`, `UnsupportedDocument`) end in the full-page error
//! message. Everything else (lookup misses, storage hiccups) is logged and
//! never reaches this type.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// A required element id is not present in the host page.
    #[error("required element #{id} is missing from the page")]
    MissingElement { id: String },
    /// The element exists but is not the kind the controller binds to.
    #[error("element #{id} is not a {expected}")]
    UnexpectedElement { id: String, expected: &'static str },
    /// The browser environment (window/document) is unavailable.
    #[error("browser environment unavailable: {0}")]
    Environment(&'static str),
    /// The data request could not be sent or its body could not be read.
    #[error("failed to fetch portfolio data: {0}")]
    Fetch(String),
    /// The data request completed with a non-success status.
    #[error("portfolio data request failed with status {0}")]
    HttpStatus(u16),
    /// The data body is not valid JSON.
    #[error("portfolio data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Valid JSON, but neither a document object nor a project array.
    #[error("portfolio data must be a JSON object or a project array")]
    UnsupportedDocument,
    /// The inline configuration block is not valid JSON for the config shape.
    #[error("invalid portfolio config: {0}")]
    Config(serde_json::Error),
}

impl PortfolioError {
    #[must_use]
    pub fn missing(id: &str) -> Self {
        Self::MissingElement { id: id.to_owned() }
    }

    /// Whether this error is a markup/packaging defect rather than a runtime
    /// data problem.
    #[must_use]
    pub fn is_markup_defect(&self) -> bool {
        matches!(self, Self::MissingElement { .. } | Self::UnexpectedElement { .. })
    }
}
