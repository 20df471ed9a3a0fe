//! Project cards and the project detail body shown in the dialog.

use leptos::prelude::*;

use crate::views::{ProjectCardView, ProjectDetailView, ProjectImage};

/// Grid of project summary cards. Each card carries `data-id` and a
/// `.project__modal-btn` trigger for the dialog controller.
#[component]
pub fn ProjectCards(cards: Vec<ProjectCardView>) -> impl IntoView {
    cards
        .into_iter()
        .map(|card| {
            let data_id = card.id.to_string();
            let alt = card.title.clone();
            let image = card.image.map(|image| match image {
                ProjectImage::Picture(src) => {
                    view! { <img class="project__img" src=src alt=alt loading="lazy"/> }.into_any()
                }
                ProjectImage::Placeholder(text) => {
                    view! { <div class="project__placeholder-img">{text}</div> }.into_any()
                }
            });
            view! {
                <article class="project__card" data-id=data_id>
                    <div class="project__img-box">{image}</div>
                    <div class="project__content">
                        <h3 class="project__title">{card.title}</h3>
                        <p class="project__description">{card.summary}</p>
                        <div class="project__tags">
                            {card.tags.into_iter().map(|tag| view! { <span>{tag}</span> }).collect_view()}
                        </div>
                        <button type="button" class="btn btn--sm btn--outline project__modal-btn">
                            "View Details"
                        </button>
                    </div>
                </article>
            }
        })
        .collect_view()
}

/// Dialog body for one project. The title goes into the dialog header
/// separately.
#[component]
pub fn ProjectDetail(detail: ProjectDetailView) -> impl IntoView {
    let ProjectDetailView { title: _, description, tech, details_html, demo, repo } = detail;

    view! {
        <p class="modal__description">{description}</p>
        <div class="modal__tech-list">
            {tech.into_iter().map(|t| view! { <span class="modal__tech-item">{t}</span> }).collect_view()}
        </div>
        <div class="modal__details" inner_html=details_html></div>
        <div class="modal__links">
            {demo.map(|href| {
                view! {
                    <a href=href class="btn btn--primary" target="_blank" rel="noreferrer">
                        "Live Demo"
                    </a>
                }
            })}
            {repo.map(|href| {
                view! {
                    <a href=href class="btn btn--secondary" target="_blank" rel="noreferrer">
                        "View Code"
                    </a>
                }
            })}
        </div>
    }
}
