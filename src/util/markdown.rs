//! Markdown rendering for project detail text.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

use super::url::{BLOCKED_URL, is_safe_url};

/// Render project details to HTML.
///
/// Raw HTML in the source is dropped and link/image destinations outside the
/// allow-list are replaced, so the output is safe for `inner_html`.
#[must_use]
pub fn render_details_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Link {
            link_type,
            dest_url: checked_destination(dest_url),
            title,
            id,
        })),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Image {
            link_type,
            dest_url: checked_destination(dest_url),
            title,
            id,
        })),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn checked_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&dest) {
        dest
    } else {
        log::warn!("blocked unsafe link in project details: {:?}", &*dest);
        CowStr::Borrowed(BLOCKED_URL)
    }
}
