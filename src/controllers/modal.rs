//! Project-details dialog.
//!
//! One delegated click listener on the projects container serves every card,
//! including cards rendered after mount. [`ModalController::attach_projects`]
//! swaps the lookup list without adding listeners.
//!
//! Triggers must sit inside the projects container. A `.project-trigger`
//! placed elsewhere in static markup is not listened to.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Node};

use crate::components::projects::ProjectDetail;
use crate::config::ModalConfig;
use crate::error::PortfolioError;
use crate::model::Project;
use crate::state::modal::{ModalCore, OpenOutcome, Ticket, TriggerOutcome};
use crate::util::dom;
use crate::views::ProjectDetailView;

pub struct ModalController {
    document: Document,
    backdrop: HtmlElement,
    title: HtmlElement,
    body: HtmlElement,
    close: HtmlElement,
    config: ModalConfig,
    core: RefCell<ModalCore>,
    return_focus: RefCell<Option<HtmlElement>>,
}

impl ModalController {
    /// Bind the dialog elements and the trigger container.
    ///
    /// # Errors
    ///
    /// Fails when any dialog element or the projects container is missing.
    pub fn mount(document: &Document, config: &ModalConfig, projects_id: &str) -> Result<Rc<Self>, PortfolioError> {
        let backdrop = dom::require_html(document, &config.backdrop_id)?;
        let title = dom::require_html(document, &config.title_id)?;
        let body = dom::require_html(document, &config.body_id)?;
        let close = dom::require_html(document, &config.close_id)?;
        let projects = dom::require_html(document, projects_id)?;

        let controller = Rc::new(Self {
            document: document.clone(),
            backdrop,
            title,
            body,
            close,
            config: config.clone(),
            core: RefCell::new(ModalCore::default()),
            return_focus: RefCell::new(None),
        });

        let this = Rc::clone(&controller);
        dom::listen(&projects, "click", move |ev: Event| this.on_container_click(&ev));

        let this = Rc::clone(&controller);
        dom::listen(&controller.close, "click", move |_: Event| this.close());

        let this = Rc::clone(&controller);
        dom::listen(&controller.backdrop, "click", move |ev: Event| {
            // Only the backdrop itself, not clicks bubbling up from content.
            let on_backdrop = dom::event_element(&ev).is_some_and(|el| {
                let node: &Node = &el;
                this.backdrop.is_same_node(Some(node))
            });
            if on_backdrop {
                this.close();
            }
        });

        let this = Rc::clone(&controller);
        dom::listen(document, "keydown", move |ev: KeyboardEvent| {
            if ev.key() == "Escape" && this.core.borrow().machine().is_visible() {
                this.close();
            }
        });

        Ok(controller)
    }

    /// Replace the list triggers are resolved against.
    pub fn attach_projects(&self, projects: Vec<Project>) {
        log::debug!("modal attached to {} projects", projects.len());
        self.core.borrow_mut().attach_projects(projects);
    }

    fn on_container_click(self: &Rc<Self>, ev: &Event) {
        let Some(target) = dom::event_element(ev) else {
            return;
        };
        let Some(trigger) = dom::closest(&target, &self.config.trigger_selector) else {
            return;
        };
        let raw_id = self.trigger_id(&trigger);
        let outcome = self.core.borrow_mut().trigger(raw_id.as_deref());
        if let TriggerOutcome::Show { view, open } = outcome {
            self.show(view, open);
        }
    }

    /// `data-id` of the trigger itself, else of its enclosing card.
    fn trigger_id(&self, trigger: &Element) -> Option<String> {
        trigger.get_attribute("data-id").or_else(|| {
            dom::closest(trigger, &self.config.card_selector).and_then(|card| card.get_attribute("data-id"))
        })
    }

    fn show(self: &Rc<Self>, detail: ProjectDetailView, open: OpenOutcome) {
        self.title.set_text_content(Some(&detail.title));
        dom::replace_with_view(&self.body, move || view! { <ProjectDetail detail=detail/> });

        let OpenOutcome::Started { ticket, from_closed } = open else {
            return;
        };
        if from_closed {
            *self.return_focus.borrow_mut() = dom::active_element(&self.document);
        }
        self.backdrop.set_hidden(false);
        dom::set_attr(&self.backdrop, "aria-hidden", "false");
        dom::set_scroll_locked(&self.document, true);
        dom::focus(&self.close);

        let this = Rc::clone(self);
        Timeout::new(self.config.open_delay_ms, move || this.finish_open(ticket)).forget();
    }

    fn finish_open(&self, ticket: Ticket) {
        if self.core.borrow_mut().machine_mut().finish_open(ticket) {
            dom::set_class(&self.backdrop, &self.config.active_class, true);
        }
    }

    fn close(self: &Rc<Self>) {
        let Some(ticket) = self.core.borrow_mut().machine_mut().request_close() else {
            return;
        };
        dom::set_class(&self.backdrop, &self.config.active_class, false);

        let this = Rc::clone(self);
        Timeout::new(self.config.close_delay_ms, move || this.finish_close(ticket)).forget();
    }

    fn finish_close(&self, ticket: Ticket) {
        if !self.core.borrow_mut().machine_mut().finish_close(ticket) {
            return;
        }
        self.backdrop.set_hidden(true);
        dom::set_attr(&self.backdrop, "aria-hidden", "true");
        dom::set_scroll_locked(&self.document, false);
        if let Some(previous) = self.return_focus.borrow_mut().take() {
            dom::focus(&previous);
        }
    }
}
