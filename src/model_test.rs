use serde_json::json;

use super::*;

fn sample_document() -> Value {
    json!({
        "hero": {
            "title": "Hi, I'm Ada",
            "subtitle": "Engineer",
            "description": "I build things.",
            "buttons": [{ "text": "Contact", "link": "#contact", "class": "btn--primary" }],
            "profileImage": "img/ada.png"
        },
        "about": { "title": "About", "paragraphs": ["One", "Two"] },
        "skills": [
            { "category": "Backend", "items": [{ "name": "Rust", "percentage": "90%" }, { "name": "SQL", "percentage": 75 }] }
        ],
        "experience": [{ "role": "Dev", "company": "Acme", "date": "2020", "tasks": ["a", "b"] }],
        "projects": [{ "id": 1, "title": "Demo", "desc": "d", "tech": ["X"], "details": "more" }],
        "education": [{ "degree": "BSc", "school": "Uni", "year": "2019" }],
        "certifications": ["AWS"],
        "contact": {
            "email": "ada@example.com",
            "phone": "123",
            "linkedin": { "text": "https://linkedin.com/in/ada", "url": "https://linkedin.com/in/ada" }
        }
    })
}

// =============================================================
// PortfolioData
// =============================================================

#[test]
fn full_document_parses_every_section() {
    let data: PortfolioData = serde_json::from_value(sample_document()).unwrap();
    assert_eq!(data.hero.ready().unwrap().title, "Hi, I'm Ada");
    assert_eq!(data.hero.ready().unwrap().profile_image.as_deref(), Some("img/ada.png"));
    assert_eq!(data.about.ready().unwrap().paragraphs, vec!["One", "Two"]);
    assert_eq!(data.skills.ready().unwrap()[0].items[0].percentage, 90);
    assert_eq!(data.skills.ready().unwrap()[0].items[1].percentage, 75);
    assert_eq!(data.experience.ready().unwrap()[0].tasks.len(), 2);
    assert_eq!(data.project_list().len(), 1);
    assert_eq!(data.education.ready().unwrap()[0].degree, "BSc");
    assert_eq!(data.certifications.ready().unwrap(), &vec!["AWS".to_owned()]);
    assert_eq!(data.contact.ready().unwrap().email, "ada@example.com");
}

#[test]
fn absent_and_null_sections_are_missing() {
    let data: PortfolioData = serde_json::from_value(json!({ "about": null })).unwrap();
    assert_eq!(data.about, Section::Missing);
    assert_eq!(data.hero, Section::Missing);
    assert!(data.project_list().is_empty());
}

#[test]
fn malformed_section_does_not_block_others() {
    let mut doc = sample_document();
    doc["skills"] = json!([{ "category": "Backend", "items": [{ "name": "Rust", "percentage": "lots" }] }]);
    doc["hero"] = json!("not an object");

    let data: PortfolioData = serde_json::from_value(doc).unwrap();
    assert!(data.skills.is_malformed());
    assert!(data.hero.is_malformed());
    assert!(data.about.ready().is_some());
    assert_eq!(data.project_list()[0].title, "Demo");
}

#[test]
fn unknown_top_level_keys_are_ignored() {
    let data: PortfolioData = serde_json::from_value(json!({ "footer": { "x": 1 }, "certifications": [] })).unwrap();
    assert_eq!(data.certifications, Section::Ready(Vec::new()));
}

// =============================================================
// Field parsing
// =============================================================

#[test]
fn percentage_is_clamped_and_rounded() {
    let skills: Vec<Skill> = serde_json::from_value(json!([
        { "name": "a", "percentage": 150 },
        { "name": "b", "percentage": -5 },
        { "name": "c", "percentage": " 42.6 % " }
    ]))
    .unwrap();
    assert_eq!(skills[0].percentage, 100);
    assert_eq!(skills[1].percentage, 0);
    assert_eq!(skills[2].percentage, 43);
}

#[test]
fn project_optional_fields_default() {
    let project: Project = serde_json::from_value(json!({ "id": 9, "title": "T", "desc": "D" })).unwrap();
    assert!(project.tech.is_empty());
    assert!(project.details.is_empty());
    assert!(project.summary.is_none());
    assert!(project.img.is_none());
}

#[test]
fn project_without_id_is_rejected() {
    let result = serde_json::from_value::<Project>(json!({ "title": "T", "desc": "D" }));
    assert!(result.is_err());
}

#[test]
fn contact_social_links_put_linkedin_first() {
    let contact: Contact = serde_json::from_value(json!({
        "email": "e",
        "phone": "p",
        "socials": [{ "text": "GitHub", "url": "https://github.com/ada" }],
        "linkedin": { "text": "LinkedIn", "url": "https://linkedin.com/in/ada" }
    }))
    .unwrap();
    let labels = contact.social_links().map(|s| s.text.as_str()).collect::<Vec<_>>();
    assert_eq!(labels, vec!["LinkedIn", "GitHub"]);
}

// =============================================================
// find_project
// =============================================================

#[test]
fn find_project_matches_exact_id_only() {
    let projects: Vec<Project> = serde_json::from_value(json!([
        { "id": 1, "title": "One", "desc": "" },
        { "id": 12, "title": "Twelve", "desc": "" }
    ]))
    .unwrap();
    assert_eq!(find_project(&projects, 12).map(|p| p.title.as_str()), Some("Twelve"));
    assert!(find_project(&projects, 2).is_none());
}
