//! Pluggable source for the portfolio document.
//!
//! Exactly one source is used per page, chosen from config at startup:
//! a remote JSON resource (`Remote`) or a JSON blob embedded in the page
//! (`Embedded`). Both feed the same [`parse_document`].

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::PortfolioError;
use crate::model::{PortfolioData, Project, Section};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSource {
    /// HTTP GET of a relative JSON resource.
    Remote {
        #[serde(default = "default_url")]
        url: String,
    },
    /// Text content of an inline `<script type="application/json">` element.
    Embedded {
        #[serde(default = "default_element_id")]
        element_id: String,
    },
}

pub const DEFAULT_URL: &str = "data.json";
pub const DEFAULT_ELEMENT_ID: &str = "projects-data";

fn default_url() -> String {
    DEFAULT_URL.to_owned()
}

fn default_element_id() -> String {
    DEFAULT_ELEMENT_ID.to_owned()
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Remote { url: default_url() }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote { url } => write!(f, "remote:{url}"),
            Self::Embedded { element_id } => write!(f, "embedded:#{element_id}"),
        }
    }
}

impl DataSource {
    /// Load and parse the document from this source.
    ///
    /// # Errors
    ///
    /// Returns a load error when the request fails, the response is not a
    /// success status, the inline element is absent, or the body does not
    /// parse as a portfolio document.
    #[cfg(feature = "csr")]
    pub async fn load(&self) -> Result<PortfolioData, PortfolioError> {
        match self {
            Self::Remote { url } => fetch_document(url).await,
            Self::Embedded { element_id } => read_embedded(element_id),
        }
    }
}

/// Parse a raw document body.
///
/// A JSON object is a full [`PortfolioData`]. A JSON array is the historical
/// inline form and becomes the project list with every other section missing.
///
/// # Errors
///
/// Returns [`PortfolioError::Parse`] for invalid JSON and
/// [`PortfolioError::UnsupportedDocument`] for any other top-level value.
pub fn parse_document(raw: &str) -> Result<PortfolioData, PortfolioError> {
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        Value::Array(_) => {
            let projects: Section<Vec<Project>> = serde_json::from_value(value)?;
            Ok(PortfolioData { projects, ..PortfolioData::default() })
        }
        _ => Err(PortfolioError::UnsupportedDocument),
    }
}

#[cfg(feature = "csr")]
async fn fetch_document(url: &str) -> Result<PortfolioData, PortfolioError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| PortfolioError::Fetch(e.to_string()))?;
    if !resp.ok() {
        return Err(PortfolioError::HttpStatus(resp.status()));
    }
    let body = resp.text().await.map_err(|e| PortfolioError::Fetch(e.to_string()))?;
    parse_document(&body)
}

#[cfg(feature = "csr")]
fn read_embedded(element_id: &str) -> Result<PortfolioData, PortfolioError> {
    let document = crate::util::dom::document()?;
    let raw = document
        .get_element_by_id(element_id)
        .ok_or_else(|| PortfolioError::missing(element_id))?
        .text_content()
        .unwrap_or_default();
    parse_document(&raw)
}
