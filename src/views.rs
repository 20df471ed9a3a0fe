//! Display view models derived from the portfolio document.
//!
//! DESIGN
//! ======
//! Components only ever see these structs. All display contracts (summary
//! truncation, card tag limit, URL sanitising, percentage widths) are applied
//! here, in plain Rust, so they are covered by native tests. The document
//! itself is never mutated.

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;

use crate::model::{Contact, Hero, Project, Skill};
use crate::util::markdown::render_details_html;
use crate::util::text::{SUMMARY_CHAR_BUDGET, truncate_chars};
use crate::util::url::{class_list, display_url, safe_url};

/// Number of technology tags shown on a project card.
pub const CARD_TAG_LIMIT: usize = 3;

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".avif"];

/// A sanitised link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkView {
    pub text: String,
    pub href: String,
    pub class: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub buttons: Vec<LinkView>,
    pub image: Option<String>,
}

impl From<&Hero> for HeroView {
    fn from(hero: &Hero) -> Self {
        Self {
            title: hero.title.clone(),
            subtitle: hero.subtitle.clone(),
            description: hero.description.clone(),
            buttons: hero
                .buttons
                .iter()
                .map(|b| LinkView { text: b.text.clone(), href: safe_url(&b.link), class: class_list(&b.class) })
                .collect(),
            image: hero.profile_image.as_deref().map(safe_url),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillBarView {
    pub name: String,
    /// CSS width, e.g. `"90%"`.
    pub width: String,
}

impl From<&Skill> for SkillBarView {
    fn from(skill: &Skill) -> Self {
        Self { name: skill.name.clone(), width: format!("{}%", skill.percentage) }
    }
}

/// What fills the image box of a project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectImage {
    /// A sanitised image URL.
    Picture(String),
    /// Short placeholder text (often a glyph) shown instead of an image.
    Placeholder(String),
}

impl ProjectImage {
    fn classify(reference: &str) -> Self {
        let lower = reference.trim().to_ascii_lowercase();
        let looks_like_path = lower.contains('/') || IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext));
        if looks_like_path {
            Self::Picture(safe_url(reference))
        } else {
            Self::Placeholder(reference.to_owned())
        }
    }
}

/// Summary card for the projects grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCardView {
    pub id: u32,
    pub title: String,
    /// Short description cut to [`SUMMARY_CHAR_BUDGET`] characters.
    pub summary: String,
    /// The first [`CARD_TAG_LIMIT`] technology tags.
    pub tags: Vec<String>,
    pub image: Option<ProjectImage>,
}

impl From<&Project> for ProjectCardView {
    fn from(project: &Project) -> Self {
        let summary = project.summary.as_deref().unwrap_or(&project.desc);
        Self {
            id: project.id,
            title: project.title.clone(),
            summary: truncate_chars(summary, SUMMARY_CHAR_BUDGET),
            tags: project.tech.iter().take(CARD_TAG_LIMIT).cloned().collect(),
            image: project.img.as_deref().filter(|s| !s.trim().is_empty()).map(ProjectImage::classify),
        }
    }
}

/// Full project view rendered into the modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDetailView {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    /// Sanitised HTML rendered from the markdown details.
    pub details_html: String,
    pub demo: Option<String>,
    pub repo: Option<String>,
}

impl From<&Project> for ProjectDetailView {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.desc.clone(),
            tech: project.tech.clone(),
            details_html: render_details_html(&project.details),
            demo: project.demo.as_deref().map(safe_url),
            repo: project.repo.as_deref().map(safe_url),
        }
    }
}

/// One card of the contact section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactCardView {
    pub icon: &'static str,
    pub label: String,
    pub value: String,
    pub action: Option<LinkView>,
}

/// Contact cards: email, phone, then each social link.
#[must_use]
pub fn contact_cards(contact: &Contact) -> Vec<ContactCardView> {
    let mut cards = Vec::new();
    if !contact.email.trim().is_empty() {
        cards.push(ContactCardView {
            icon: "\u{2709}",
            label: "Email".to_owned(),
            value: contact.email.clone(),
            action: Some(LinkView {
                text: "Write me".to_owned(),
                href: safe_url(&format!("mailto:{}", contact.email.trim())),
                class: "contact__button".to_owned(),
            }),
        });
    }
    if !contact.phone.trim().is_empty() {
        let dial: String = contact.phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
        cards.push(ContactCardView {
            icon: "\u{1F4F1}",
            label: "Phone".to_owned(),
            value: contact.phone.clone(),
            action: (!dial.is_empty()).then(|| LinkView {
                text: "Call".to_owned(),
                href: format!("tel:{dial}"),
                class: "contact__button".to_owned(),
            }),
        });
    }
    for social in contact.social_links() {
        let network = social_network(&social.url);
        cards.push(ContactCardView {
            icon: network.map_or(GENERIC_LINK_ICON, |n| n.icon),
            label: network.map_or_else(|| social.text.clone(), |n| n.label.to_owned()),
            value: display_url(&social.text).to_owned(),
            action: Some(LinkView {
                text: "Connect".to_owned(),
                href: safe_url(&social.url),
                class: "contact__button".to_owned(),
            }),
        });
    }
    cards
}

/// Footer social links, in the same order as the contact cards.
#[must_use]
pub fn footer_links(contact: &Contact) -> Vec<LinkView> {
    contact
        .social_links()
        .map(|social| LinkView {
            text: social_network(&social.url).map_or_else(|| social.text.clone(), |n| n.label.to_owned()),
            href: safe_url(&social.url),
            class: "footer__social-link".to_owned(),
        })
        .collect()
}

/// Icon for social links on hosts not in [`SOCIAL_NETWORKS`].
const GENERIC_LINK_ICON: &str = "\u{1F517}";

#[derive(Clone, Copy)]
struct SocialNetwork {
    domain: &'static str,
    label: &'static str,
    icon: &'static str,
}

const SOCIAL_NETWORKS: &[SocialNetwork] = &[
    SocialNetwork { domain: "linkedin.com", label: "LinkedIn", icon: "\u{1F4BC}" },
    SocialNetwork { domain: "github.com", label: "GitHub", icon: "\u{1F419}" },
    SocialNetwork { domain: "gitlab.com", label: "GitLab", icon: "\u{1F98A}" },
    SocialNetwork { domain: "x.com", label: "X", icon: "\u{1D54F}" },
    SocialNetwork { domain: "twitter.com", label: "Twitter", icon: "\u{1F426}" },
];

fn social_network(url: &str) -> Option<SocialNetwork> {
    let host = display_url(url).to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    SOCIAL_NETWORKS.iter().copied().find(|n| host.starts_with(n.domain))
}
