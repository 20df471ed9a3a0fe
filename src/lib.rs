//! Client behaviour for a static portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page ships its own markup and styles. This crate, compiled to
//! WASM with the `csr` feature, binds to that markup by element id: a theme
//! toggle, a mobile nav menu, a data renderer that fills the page sections
//! from one JSON document, and a project-details dialog.
//!
//! DESIGN
//! ======
//! Everything that can be decided without a browser lives in plain modules
//! (`model`, `views`, `state`, `util`, `config`, `net::source`) and is tested
//! natively. `controllers` holds the thin DOM glue and only builds with `csr`.
//!
//! ERROR HANDLING
//! ==============
//! Controllers fail at mount when required elements are missing. `start`
//! keeps going after a failed controller so independent widgets still work,
//! then reports the first failure to the JS caller.

pub mod components;
pub mod config;
#[cfg(feature = "csr")]
pub mod controllers;
pub mod error;
pub mod model;
pub mod net;
pub mod state;
pub mod util;
pub mod views;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// WASM entry point.
///
/// # Errors
///
/// Returns the first controller mount failure as a JS exception, after every
/// controller that could start has started.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    use controllers::modal::ModalController;
    use controllers::nav::NavController;
    use controllers::renderer::DataRenderer;
    use controllers::theme::ThemeController;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::warn!("logger already installed");
    }

    let document = util::dom::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let config = config::PortfolioConfig::from_page(&document);
    log::set_max_level(config.log_level().to_level_filter());

    let mut failures = Vec::new();

    if let Err(e) = ThemeController::mount(&document, &config.theme) {
        failures.push(e);
    }
    if let Err(e) = NavController::mount(&document, &config.nav) {
        failures.push(e);
    }
    if !controllers::contact_form::mount(&document, &config.contact_form_id) {
        log::debug!("no #{} on this page", config.contact_form_id);
    }

    let pipeline = ModalController::mount(&document, &config.modal, &config.sections.projects)
        .and_then(|modal| DataRenderer::mount(&document, &config, modal));
    match pipeline {
        Ok(renderer) => leptos::task::spawn_local(renderer.run()),
        Err(e) => failures.push(e),
    }

    for e in &failures {
        if e.is_markup_defect() {
            log::error!("startup: host page markup does not match the configured ids: {e}");
        } else {
            log::error!("startup: {e}");
        }
    }
    match failures.into_iter().next() {
        Some(first) => Err(JsValue::from_str(&first.to_string())),
        None => Ok(()),
    }
}
