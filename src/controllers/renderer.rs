//! Loads the portfolio document and renders it into the host page.
//!
//! DESIGN
//! ======
//! Every section container is resolved at mount, so a page missing one fails
//! before any network traffic. Rendering is per section: a `Missing` section
//! leaves the shipped markup alone, a `Malformed` one gets an inline notice,
//! and neither stops the sections after it.
//!
//! ERROR HANDLING
//! ==============
//! A failed load replaces the whole body with a single error message. The
//! modal keeps an empty project list in that case.

use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::components::contact::{ContactCards, FooterSocial};
use crate::components::notice::{LoadErrorPage, SectionUnavailable};
use crate::components::projects::ProjectCards;
use crate::components::sections::{
    AboutParagraphs, CertificationItems, EducationList, ExperienceList, HeroSection, SkillsGrid,
};
use crate::config::PortfolioConfig;
use crate::controllers::modal::ModalController;
use crate::error::PortfolioError;
use crate::model::{PortfolioData, Section};
use crate::net::source::DataSource;
use crate::util::dom;
use crate::views::{self, HeroView, ProjectCardView};

pub struct DataRenderer {
    source: DataSource,
    document: Document,
    modal: Rc<ModalController>,
    hero: HtmlElement,
    about_title: HtmlElement,
    about_body: HtmlElement,
    skills: HtmlElement,
    experience: HtmlElement,
    projects: HtmlElement,
    education: HtmlElement,
    certifications: HtmlElement,
    contact: HtmlElement,
    footer_social: HtmlElement,
}

impl DataRenderer {
    /// Resolve every section container.
    ///
    /// # Errors
    ///
    /// Fails with the first section container that is missing.
    pub fn mount(
        document: &Document,
        config: &PortfolioConfig,
        modal: Rc<ModalController>,
    ) -> Result<Self, PortfolioError> {
        let ids = &config.sections;
        Ok(Self {
            source: config.source.clone(),
            document: document.clone(),
            modal,
            hero: dom::require_html(document, &ids.hero)?,
            about_title: dom::require_html(document, &ids.about_title)?,
            about_body: dom::require_html(document, &ids.about_body)?,
            skills: dom::require_html(document, &ids.skills)?,
            experience: dom::require_html(document, &ids.experience)?,
            projects: dom::require_html(document, &ids.projects)?,
            education: dom::require_html(document, &ids.education)?,
            certifications: dom::require_html(document, &ids.certifications)?,
            contact: dom::require_html(document, &ids.contact)?,
            footer_social: dom::require_html(document, &ids.footer_social)?,
        })
    }

    /// Load the document once and render it.
    pub async fn run(self) {
        log::info!("loading portfolio from {}", self.source);
        match self.source.load().await {
            Ok(data) => self.render(data),
            Err(e) => {
                log::error!("portfolio load failed: {e}");
                self.render_load_error();
            }
        }
    }

    fn render(&self, data: PortfolioData) {
        let project_list = data.project_list().to_vec();
        let PortfolioData { hero, about, skills, experience, projects, education, certifications, contact } = data;

        render_section("hero", &self.hero, hero, |hero| {
            view! { <HeroSection hero=HeroView::from(&hero)/> }
        });

        if let Some(about) = about.ready() {
            self.about_title.set_text_content(Some(&about.title));
        }
        render_section("about", &self.about_body, about, |about| {
            view! { <AboutParagraphs paragraphs=about.paragraphs/> }
        });

        render_section("skills", &self.skills, skills, |categories| {
            view! { <SkillsGrid categories=categories/> }
        });
        render_section("experience", &self.experience, experience, |jobs| {
            view! { <ExperienceList jobs=jobs/> }
        });
        render_section("projects", &self.projects, projects, |projects| {
            let cards = projects.iter().map(ProjectCardView::from).collect::<Vec<_>>();
            view! { <ProjectCards cards=cards/> }
        });
        render_section("education", &self.education, education, |entries| {
            view! { <EducationList entries=entries/> }
        });
        render_section("certifications", &self.certifications, certifications, |certifications| {
            view! { <CertificationItems certifications=certifications/> }
        });

        render_section("contact", &self.contact, contact.clone(), |contact| {
            let cards = views::contact_cards(&contact);
            view! { <ContactCards cards=cards/> }
        });
        render_section("footer", &self.footer_social, contact, |contact| {
            let links = views::footer_links(&contact);
            view! { <FooterSocial links=links/> }
        });

        self.modal.attach_projects(project_list);
    }

    fn render_load_error(&self) {
        match self.document.body() {
            Some(body) => dom::replace_with_view(&body, || view! { <LoadErrorPage/> }),
            None => log::error!("no document body to report the load failure in"),
        }
    }
}

fn render_section<T, F, N>(name: &str, container: &HtmlElement, section: Section<T>, render: F)
where
    T: 'static,
    F: FnOnce(T) -> N + 'static,
    N: IntoView,
{
    match section {
        Section::Ready(value) => dom::replace_with_view(container, move || render(value)),
        Section::Missing => log::debug!("{name}: no data, keeping page content"),
        Section::Malformed(reason) => {
            log::warn!("{name}: malformed section: {reason}");
            dom::replace_with_view(container, || view! { <SectionUnavailable/> });
        }
    }
}
