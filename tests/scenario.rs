//! End-to-end page flows through the public API, without a browser.

use portfolio::config::PortfolioConfig;
use portfolio::model::Section;
use portfolio::net::source::parse_document;
use portfolio::state::modal::{ModalCore, ModalPhase, OpenOutcome, TriggerOutcome};
use portfolio::state::theme::{Theme, ThemeState};
use portfolio::util::storage::{MemoryStore, PreferenceStore};
use portfolio::views::{self, ProjectCardView};

fn document_json() -> String {
    let desc = "A".repeat(150);
    format!(
        r#"{{
            "about": {{ "title": "About me", "paragraphs": ["one", "two"] }},
            "skills": "not a list",
            "projects": [
                {{ "id": 1, "title": "Demo", "desc": "{desc}", "tech": ["X", "Y", "Z", "W"],
                   "details": "**bold** <script>alert(1)</script>",
                   "repo": "javascript:alert(1)" }},
                {{ "id": 2, "title": "Other", "desc": "short" }}
            ],
            "contact": {{
                "email": "me@example.com",
                "linkedin": {{ "text": "linkedin.com/in/me", "url": "https://linkedin.com/in/me" }}
            }}
        }}"#
    )
}

#[test]
fn document_renders_cards_and_opens_full_details() {
    let data = parse_document(&document_json()).unwrap();

    assert!(matches!(data.hero, Section::Missing));
    assert!(data.skills.is_malformed());
    assert_eq!(data.about.ready().map(|a| a.paragraphs.len()), Some(2));

    let cards: Vec<ProjectCardView> = data.project_list().iter().map(ProjectCardView::from).collect();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].summary, format!("{}\u{2026}", "A".repeat(100)));
    assert_eq!(cards[0].tags, vec!["X", "Y", "Z"]);
    assert_eq!(cards[1].summary, "short");

    let mut modal = ModalCore::new(data.project_list().to_vec());
    let TriggerOutcome::Show { view, open } = modal.trigger(Some("1")) else {
        panic!("project 1 should open");
    };
    assert_eq!(view.description, "A".repeat(150));
    assert_eq!(view.tech.len(), 4);
    assert!(view.details_html.contains("<strong>bold</strong>"));
    assert!(!view.details_html.contains("<script"));
    assert_eq!(view.repo.as_deref(), Some("#"));
    assert!(matches!(open, OpenOutcome::Started { from_closed: true, .. }));
}

#[test]
fn switching_projects_while_open_reuses_the_dialog() {
    let data = parse_document(&document_json()).unwrap();
    let mut modal = ModalCore::new(data.project_list().to_vec());

    let TriggerOutcome::Show { open: OpenOutcome::Started { ticket, .. }, .. } = modal.trigger(Some("1")) else {
        panic!("first trigger should start opening");
    };
    assert!(modal.machine_mut().finish_open(ticket));
    assert_eq!(modal.machine().phase(), ModalPhase::Open);

    let TriggerOutcome::Show { view, open } = modal.trigger(Some("2")) else {
        panic!("project 2 should show");
    };
    assert_eq!(view.title, "Other");
    assert_eq!(open, OpenOutcome::Replaced);
    assert_eq!(modal.trigger(Some("99")), TriggerOutcome::NotFound(99));
    assert_eq!(modal.machine().phase(), ModalPhase::Open);
}

#[test]
fn close_then_quick_reopen_ignores_the_stale_close_timer() {
    let mut modal = ModalCore::new(parse_document(&document_json()).unwrap().project_list().to_vec());

    let TriggerOutcome::Show { open: OpenOutcome::Started { ticket, .. }, .. } = modal.trigger(Some("1")) else {
        panic!("should open");
    };
    assert!(modal.machine_mut().finish_open(ticket));
    let close_ticket = modal.machine_mut().request_close().unwrap();

    let TriggerOutcome::Show { open: OpenOutcome::Started { ticket: reopen, .. }, .. } = modal.trigger(Some("1")) else {
        panic!("reopen during close should start a new open");
    };
    assert!(!modal.machine_mut().finish_close(close_ticket));
    assert!(modal.machine_mut().finish_open(reopen));
    assert!(modal.machine().is_visible());
}

#[test]
fn inline_array_document_feeds_only_projects() {
    let data = parse_document(r#"[{"id": 7, "title": "Solo", "desc": "d"}]"#).unwrap();
    assert_eq!(data.project_list().len(), 1);
    assert!(matches!(data.contact, Section::Missing));

    let mut modal = ModalCore::default();
    modal.attach_projects(data.project_list().to_vec());
    assert!(matches!(modal.trigger(Some("7")), TriggerOutcome::Show { .. }));
}

#[test]
fn contact_and_footer_share_social_links() {
    let data = parse_document(&document_json()).unwrap();
    let contact = data.contact.ready().unwrap();

    let cards = views::contact_cards(contact);
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1].label, "LinkedIn");

    let footer = views::footer_links(contact);
    assert_eq!(footer.len(), 1);
    assert_eq!(footer[0].href, "https://linkedin.com/in/me");
}

#[test]
fn theme_survives_a_reload() {
    let config = PortfolioConfig::default();
    let key = config.theme.storage_key.clone();

    let mut first = ThemeState::load(MemoryStore::new(), key.clone(), false);
    assert_eq!(first.current(), Theme::Light);
    assert_eq!(first.toggle(), Theme::Dark);

    let store = first.into_store();
    assert_eq!(store.load(&key).as_deref(), Some("dark"));
    let second = ThemeState::load(store, key, false);
    assert_eq!(second.current(), Theme::Dark);
}
