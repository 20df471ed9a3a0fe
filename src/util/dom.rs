//! Browser DOM glue shared by the controllers (csr only).

use leptos::prelude::IntoView;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::error::PortfolioError;

pub fn window() -> Result<web_sys::Window, PortfolioError> {
    web_sys::window().ok_or(PortfolioError::Environment("window"))
}

pub fn document() -> Result<Document, PortfolioError> {
    window()?.document().ok_or(PortfolioError::Environment("document"))
}

/// Element with `id`, which must exist and be an HTML element.
///
/// # Errors
///
/// `MissingElement` when absent, `UnexpectedElement` for non-HTML nodes.
pub fn require_html(document: &Document, id: &str) -> Result<HtmlElement, PortfolioError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PortfolioError::missing(id))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PortfolioError::UnexpectedElement { id: id.to_owned(), expected: "HTML element" })
}

/// Like [`require_html`] for elements the page may legitimately omit.
pub fn optional_html(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Attach `handler` for `event` on `target` for the life of the page.
///
/// Events that are not of type `E` are ignored.
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Ok(typed) = ev.dyn_into::<E>() {
            handler(typed);
        }
    });
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("failed to attach {event} listener: {e:?}");
        return;
    }
    closure.forget();
}

/// The element an event was dispatched to.
pub fn event_element(ev: &Event) -> Option<Element> {
    ev.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Closest ancestor-or-self matching `selector`.
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    match el.closest(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("invalid selector {selector:?}: {e:?}");
            None
        }
    }
}

pub fn active_element(document: &Document) -> Option<HtmlElement> {
    document
        .active_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(e) = el.set_attribute(name, value) {
        log::warn!("failed to set {name}={value}: {e:?}");
    }
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        log::warn!("failed to update class {class}: {e:?}");
    }
}

pub fn focus(el: &HtmlElement) {
    if let Err(e) = el.focus() {
        log::debug!("focus failed: {e:?}");
    }
}

/// Lock or unlock page scrolling behind an overlay.
pub fn set_scroll_locked(document: &Document, locked: bool) {
    let Some(body) = document.body() else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(drop)
    };
    if let Err(e) = result {
        log::warn!("failed to update body overflow: {e:?}");
    }
}

/// Replace the content of `container` with a freshly mounted view.
pub fn replace_with_view<F, N>(container: &HtmlElement, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    container.set_inner_html("");
    leptos::mount::mount_to(container.clone(), view).forget();
}
