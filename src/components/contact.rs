use leptos::prelude::*;

use crate::views::{ContactCardView, LinkView};

#[component]
pub fn ContactCards(cards: Vec<ContactCardView>) -> impl IntoView {
    cards
        .into_iter()
        .map(|card| {
            let action = card.action.map(|link| {
                view! {
                    <a href=link.href class=link.class target="_blank" rel="noreferrer">
                        {link.text}
                        " "
                        <span class="contact__arrow">"\u{2192}"</span>
                    </a>
                }
            });
            view! {
                <div class="contact__card">
                    <i class="contact__icon">{card.icon}</i>
                    <h3 class="contact__card-title">{card.label}</h3>
                    <span class="contact__card-data">{card.value}</span>
                    {action}
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn FooterSocial(links: Vec<LinkView>) -> impl IntoView {
    links
        .into_iter()
        .map(|link| {
            let label = link.text.clone();
            view! {
                <a href=link.href class=link.class target="_blank" rel="noreferrer" aria-label=label>
                    {link.text}
                </a>
            }
        })
        .collect_view()
}
