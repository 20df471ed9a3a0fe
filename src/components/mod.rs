//! Leptos views for the page sections and the project dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive prepared view models from `crate::views` and only lay
//! them out. Text is always rendered as text nodes; the one `inner_html` use
//! (project details) takes HTML already sanitised by `util::markdown`.

pub mod contact;
pub mod notice;
pub mod projects;
pub mod sections;
