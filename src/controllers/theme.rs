//! Theme toggle bound to the document root and `localStorage`.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Event, HtmlElement};

use crate::config::ThemeConfig;
use crate::error::PortfolioError;
use crate::state::theme::{Theme, ThemeState};
use crate::util::dom;
use crate::util::storage::LocalStore;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub struct ThemeController {
    root: Element,
    button: HtmlElement,
    attribute: String,
    state: RefCell<ThemeState<LocalStore>>,
}

impl ThemeController {
    /// Resolve and apply the startup theme, then wire the toggle button.
    ///
    /// The resolved theme is applied before the button is looked up, so a
    /// page without a toggle still gets the stored/system theme.
    ///
    /// # Errors
    ///
    /// Fails when the document root or the toggle button is missing.
    pub fn mount(document: &Document, config: &ThemeConfig) -> Result<Rc<Self>, PortfolioError> {
        let root = document
            .document_element()
            .ok_or(PortfolioError::Environment("document element"))?;
        let state = ThemeState::load(LocalStore, config.storage_key.clone(), system_prefers_dark());
        dom::set_attr(&root, &config.attribute, state.current().as_str());

        let button = dom::require_html(document, &config.toggle_id)?;
        let controller = Rc::new(Self {
            root,
            button,
            attribute: config.attribute.clone(),
            state: RefCell::new(state),
        });
        controller.apply(controller.current());

        let this = Rc::clone(&controller);
        dom::listen(&controller.button, "click", move |_: Event| {
            let next = this.state.borrow_mut().toggle();
            log::debug!("theme toggled to {}", next.as_str());
            this.apply(next);
        });
        Ok(controller)
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.state.borrow().current()
    }

    fn apply(&self, theme: Theme) {
        dom::set_attr(&self.root, &self.attribute, theme.as_str());
        dom::set_attr(&self.button, "aria-pressed", if theme == Theme::Dark { "true" } else { "false" });
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map_or(false, |mq| mq.matches())
}
