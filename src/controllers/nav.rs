//! Mobile navigation menu.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent, Node};

use crate::config::NavConfig;
use crate::error::PortfolioError;
use crate::state::nav::{NavEvent, NavState};
use crate::util::dom;

pub struct NavController {
    menu: HtmlElement,
    toggle: HtmlElement,
    open_class: String,
    state: Cell<NavState>,
}

impl NavController {
    /// Bind the menu and its toggle and install the hide/show listeners.
    ///
    /// # Errors
    ///
    /// Fails when the menu or toggle element is missing.
    pub fn mount(document: &Document, config: &NavConfig) -> Result<Rc<Self>, PortfolioError> {
        let menu = dom::require_html(document, &config.menu_id)?;
        let toggle = dom::require_html(document, &config.toggle_id)?;
        let controller = Rc::new(Self {
            menu,
            toggle,
            open_class: config.open_class.clone(),
            state: Cell::new(NavState::default()),
        });
        controller.sync();

        let this = Rc::clone(&controller);
        dom::listen(&controller.toggle, "click", move |_: Event| this.handle(NavEvent::ToggleClicked));

        if let Some(close) = dom::optional_html(document, &config.close_id) {
            let this = Rc::clone(&controller);
            dom::listen(&close, "click", move |_: Event| this.handle(NavEvent::CloseClicked));
        }

        // Delegated so links added after mount are covered too.
        let this = Rc::clone(&controller);
        let link_selector = config.link_selector.clone();
        dom::listen(&controller.menu, "click", move |ev: Event| {
            let on_link = dom::event_element(&ev).is_some_and(|el| dom::closest(&el, &link_selector).is_some());
            if on_link {
                this.handle(NavEvent::LinkClicked);
            }
        });

        let this = Rc::clone(&controller);
        dom::listen(document, "click", move |ev: Event| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            let inside = this.menu.contains(Some(&target)) || this.toggle.contains(Some(&target));
            if !inside {
                this.handle(NavEvent::OutsideClicked);
            }
        });

        let this = Rc::clone(&controller);
        dom::listen(document, "keydown", move |ev: KeyboardEvent| {
            if ev.key() == "Escape" {
                this.handle(NavEvent::EscapePressed);
            }
        });

        Ok(controller)
    }

    fn handle(&self, event: NavEvent) {
        let mut state = self.state.get();
        if state.apply(event) {
            self.state.set(state);
            self.sync();
        }
    }

    fn sync(&self) {
        let state = self.state.get();
        dom::set_class(&self.menu, &self.open_class, state.expanded());
        dom::set_attr(&self.toggle, "aria-expanded", state.aria_expanded());
    }
}
