//! Template rendering engine: (resume, variant, colours) → self-contained HTML.
//!
//! Pure and total. Each variant lives in its own module and is a free function
//! from the same inputs to a `String`; there is no shared mutable state and no
//! I/O. All user-supplied text goes through [`escape`] before interpolation —
//! skipping it anywhere is a correctness bug, not a style choice. Sections
//! backed by empty collections contribute zero markup.
//!
//! Colour and URL values are passed through as-is; validating them is the
//! editing surface's job.

mod casual;
mod playful;
mod professional;

use chrono::{DateTime, Utc};

use crate::resume::{ColorScheme, Experience, Resume, Template};

/// Renders `resume` with the given variant and colour scheme.
///
/// Deterministic: identical inputs yield byte-identical output. Never fails
/// for a structurally valid document; an all-empty resume renders to a valid
/// page with no optional sections.
pub fn render(resume: &Resume, template: Template, colors: &ColorScheme) -> String {
    match template {
        Template::Professional => professional::render(resume, colors),
        Template::Casual => casual::render(resume, colors),
        Template::Playful => playful::render(resume, colors),
    }
}

/// Escapes the four HTML-significant characters in user-supplied text.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Fixed human-readable date format, e.g. "Mar 2021".
pub(crate) fn format_month(date: &DateTime<Utc>) -> String {
    date.format("%b %Y").to_string()
}

/// "Mar 2021 - Present" / "Mar 2021 - Jun 2023" / "Mar 2021 - ".
///
/// The current-role flag wins over any stored end date.
pub(crate) fn date_range(exp: &Experience) -> String {
    let end = if exp.is_current_role {
        "Present".to_string()
    } else {
        exp.end_date.as_ref().map(format_month).unwrap_or_default()
    };
    format!("{} - {}", format_month(&exp.start_date), end)
}

/// Wraps `body` in `wrapper` markup only when `body` is non-empty, so an
/// empty collection never leaves an empty container behind.
pub(crate) fn section(body: &str, wrapper: impl FnOnce(&str) -> String) -> String {
    if body.is_empty() {
        String::new()
    } else {
        wrapper(body)
    }
}
