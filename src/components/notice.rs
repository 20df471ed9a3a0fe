//! Failure notices.

use leptos::prelude::*;

/// Shown in place of the whole page when the document cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading portfolio data. Please try again later.";

/// Shown in place of a single section whose data is malformed.
pub const SECTION_UNAVAILABLE_MESSAGE: &str = "This section is unavailable right now.";

#[component]
pub fn LoadErrorPage() -> impl IntoView {
    view! {
        <p class="error-msg" role="alert">
            {LOAD_ERROR_MESSAGE}
        </p>
    }
}

#[component]
pub fn SectionUnavailable() -> impl IntoView {
    view! { <p class="section-unavailable">{SECTION_UNAVAILABLE_MESSAGE}</p> }
}
