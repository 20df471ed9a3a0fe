//! URL and attribute sanitising for values that come from the data document.
//!
//! Text always lands in text nodes, so only attribute values need care here:
//! `href`/`src` destinations and class lists.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

/// Replacement destination for anything `safe_url` rejects.
pub const BLOCKED_URL: &str = "#";

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Whether `url` is a destination we are willing to put in `href`/`src`.
///
/// Fragment and relative references are allowed; absolute URLs only with an
/// allow-listed scheme.
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    let trimmed = url.trim();
    if trimmed.chars().any(char::is_control) {
        return false;
    }
    match scheme_of(trimmed) {
        Some(scheme) => ALLOWED_SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)),
        None => true,
    }
}

/// `url` trimmed when safe, otherwise [`BLOCKED_URL`].
#[must_use]
pub fn safe_url(url: &str) -> String {
    if is_safe_url(url) {
        url.trim().to_owned()
    } else {
        log::warn!("blocked unsafe url: {url:?}");
        BLOCKED_URL.to_owned()
    }
}

/// Keep only class-name characters from a data-supplied class list.
#[must_use]
pub fn class_list(raw: &str) -> String {
    raw.split_whitespace()
        .map(|class| {
            class
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human label for a URL: scheme and trailing slash removed.
#[must_use]
pub fn display_url(url: &str) -> &str {
    let trimmed = url.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme.strip_suffix('/').unwrap_or(without_scheme)
}

/// Scheme of an absolute URL, if the text before the first `:` is a scheme
/// and appears before any path, query or fragment delimiter.
fn scheme_of(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let delimiter = url.find(['/', '?', '#']).unwrap_or(usize::MAX);
    if colon > delimiter {
        return None;
    }
    let scheme = &url[..colon];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        // Not a valid scheme name; browsers still treat e.g. "java script:" as
        // opaque, so refuse rather than treat as relative.
        Some("")
    }
}
