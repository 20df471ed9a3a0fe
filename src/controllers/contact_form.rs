//! Client-side guard on the optional contact form.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement};

use crate::util::dom;

pub const INVALID_FORM_MESSAGE: &str = "Please fill out all fields correctly.";

/// Block submission of an invalid form and tell the user why.
///
/// Returns `false` when the page has no such form. Valid forms submit
/// natively.
pub fn mount(document: &Document, form_id: &str) -> bool {
    let Some(form) = document
        .get_element_by_id(form_id)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return false;
    };

    let target = form.clone();
    dom::listen(&form, "submit", move |ev: Event| {
        if target.check_validity() {
            return;
        }
        ev.prevent_default();
        log::info!("contact form submit blocked: invalid fields");
        match dom::window() {
            Ok(window) => {
                if let Err(e) = window.alert_with_message(INVALID_FORM_MESSAGE) {
                    log::warn!("alert failed: {e:?}");
                }
            }
            Err(e) => log::warn!("{e}"),
        }
    });
    true
}
