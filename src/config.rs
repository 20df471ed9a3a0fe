//! Page configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every element id, selector, storage key and timing the controllers bind to
//! lives here with defaults matching the shipped markup. A host page may
//! override any subset through an inline JSON block:
//!
//! ```html
//! <script id="portfolio-config" type="application/json">
//!   { "source": { "kind": "embedded", "element_id": "projects-data" } }
//! </script>
//! ```
//!
//! Missing keys keep their defaults (`#[serde(default)]` at every level).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::PortfolioError;
use crate::net::source::DataSource;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortfolioConfig {
    pub source: DataSource,
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub modal: ModalConfig,
    pub sections: SectionIds,
    pub contact_form_id: String,
    pub log_level: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            theme: ThemeConfig::default(),
            nav: NavConfig::default(),
            modal: ModalConfig::default(),
            sections: SectionIds::default(),
            contact_form_id: "contact-form".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl PortfolioConfig {
    /// Parse an inline config block, layering it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Config`] when `raw` is not valid JSON for the
    /// config shape.
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(PortfolioError::Config)
    }

    /// Console log level; unknown names fall back to `Info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }

    /// Read the inline config element, falling back to defaults when it is
    /// absent or invalid.
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn from_page(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}; using default configuration");
                Self::default()
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub storage_key: String,
    /// Attribute set on the document root (`<html>`).
    pub attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "theme-toggle".to_owned(),
            storage_key: "theme".to_owned(),
            attribute: "data-theme".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    pub menu_id: String,
    pub toggle_id: String,
    /// Optional dedicated close button inside the menu.
    pub close_id: String,
    pub link_selector: String,
    pub open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            menu_id: "nav-menu".to_owned(),
            toggle_id: "nav-toggle".to_owned(),
            close_id: "nav-close".to_owned(),
            link_selector: ".nav__link, .nav-link".to_owned(),
            open_class: "show-menu".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModalConfig {
    pub backdrop_id: String,
    pub title_id: String,
    pub body_id: String,
    pub close_id: String,
    pub trigger_selector: String,
    pub card_selector: String,
    pub active_class: String,
    pub open_delay_ms: u32,
    pub close_delay_ms: u32,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            backdrop_id: "modal-backdrop".to_owned(),
            title_id: "modal-title".to_owned(),
            body_id: "modal-body".to_owned(),
            close_id: "modal-close".to_owned(),
            trigger_selector: ".project__modal-btn, .project-trigger".to_owned(),
            card_selector: ".project__card".to_owned(),
            active_class: "active".to_owned(),
            open_delay_ms: 10,
            close_delay_ms: 300,
        }
    }
}

/// Container ids the renderer replaces.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SectionIds {
    pub hero: String,
    pub about_title: String,
    pub about_body: String,
    pub skills: String,
    pub experience: String,
    pub projects: String,
    pub education: String,
    pub certifications: String,
    pub contact: String,
    pub footer_social: String,
}

impl Default for SectionIds {
    fn default() -> Self {
        Self {
            hero: "hero-container".to_owned(),
            about_title: "about-title".to_owned(),
            about_body: "about-data".to_owned(),
            skills: "skills-container".to_owned(),
            experience: "experience-container".to_owned(),
            projects: "projects-container".to_owned(),
            education: "education-container".to_owned(),
            certifications: "certifications-list".to_owned(),
            contact: "contact-container".to_owned(),
            footer_social: "footer-social".to_owned(),
        }
    }
}
