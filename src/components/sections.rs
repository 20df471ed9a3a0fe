//! Hero, about, skills, experience and education sections.

use leptos::prelude::*;

use crate::model::{Education, Job, SkillCategory};
use crate::views::{HeroView, SkillBarView};

#[component]
pub fn HeroSection(hero: HeroView) -> impl IntoView {
    let HeroView { title, subtitle, description, buttons, image } = hero;

    view! {
        <div class="hero__content">
            <h1 class="hero__title">{title}</h1>
            <h2 class="hero__subtitle">{subtitle}</h2>
            <p class="hero__description">{description}</p>
            <div class="hero__btns">
                {buttons
                    .into_iter()
                    .map(|button| {
                        let class = format!("btn {}", button.class);
                        view! { <a href=button.href class=class>{button.text}</a> }
                    })
                    .collect_view()}
            </div>
        </div>
        {image.map(|src| {
            view! {
                <div class="hero__image-wrapper">
                    <div class="hero__blob"></div>
                    <img src=src alt="Profile" class="hero__img" width="300" height="400" loading="eager"/>
                </div>
            }
        })}
    }
}

#[component]
pub fn AboutParagraphs(paragraphs: Vec<String>) -> impl IntoView {
    paragraphs
        .into_iter()
        .map(|p| view! { <p class="about__description">{p}</p> })
        .collect_view()
}

#[component]
pub fn SkillsGrid(categories: Vec<SkillCategory>) -> impl IntoView {
    categories
        .into_iter()
        .map(|category| {
            let bars = category.items.iter().map(SkillBarView::from).collect::<Vec<_>>();
            view! {
                <div class="skills__content">
                    <h3 class="skills__title">{category.category}</h3>
                    <div class="skills__box">
                        <div class="skills__group">
                            {bars
                                .into_iter()
                                .map(|bar| {
                                    let style = format!("width: {};", bar.width);
                                    view! {
                                        <div class="skills__data">
                                            <h4 class="skills__name">{bar.name}</h4>
                                            <div class="skills__bar">
                                                <span class="skills__percentage" style=style></span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn ExperienceList(jobs: Vec<Job>) -> impl IntoView {
    jobs.into_iter()
        .map(|job| {
            view! {
                <div class="experience__card">
                    <div class="experience__header">
                        <h3 class="experience__role">{job.role}</h3>
                        <span class="experience__company">{job.company}</span>
                        <span class="experience__date">{job.date}</span>
                    </div>
                    <ul class="experience__list">
                        {job.tasks.into_iter().map(|task| view! { <li>{task}</li> }).collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn EducationList(entries: Vec<Education>) -> impl IntoView {
    entries
        .into_iter()
        .map(|edu| {
            view! {
                <div class="education__card">
                    <h3 class="education__degree">{edu.degree}</h3>
                    <p class="education__school">{edu.school}</p>
                    <p class="education__year">{edu.year}</p>
                </div>
            }
        })
        .collect_view()
}

/// `<li>` items for the certifications list.
#[component]
pub fn CertificationItems(certifications: Vec<String>) -> impl IntoView {
    certifications
        .into_iter()
        .map(|cert| view! { <li>{cert}</li> })
        .collect_view()
}
