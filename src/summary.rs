// src/summary.rs

//! Summary extraction and truncation for long responses.
//!
//! Long responses are unpleasant to listen to in full, so before a response
//! is voiced it passes through here: either an explicitly labeled summary
//! section is extracted, or the text is cut down to a character budget.

use std::sync::LazyLock;

use regex::Regex;

/// Suffix appended whenever text is truncated to the `max_length` budget.
pub const TRUNCATION_SUFFIX: &str = "... [Content truncated for brevity]";

/// Patterns that mark an explicit summary section, in priority order.
///
/// The first pattern that matches wins, even when a later, more specific one
/// would also match. Reordering this list changes which section gets voiced
/// for documents containing several candidates, so the order is part of the
/// contract.
static SUMMARY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)## *summary.*?\n(.*?)(?:\n##|\z)",
        r"(?is)### *summary.*?\n(.*?)(?:\n###|\z)",
        r"(?is)## *conclusion.*?\n(.*?)(?:\n##|\z)",
        r"(?is)### *conclusion.*?\n(.*?)(?:\n###|\z)",
        r"(?is)summary:.*?\n(.*?)(?:\n\n|\z)",
        r"(?is)in summary[,:]+(.*?)(?:\n\n|\z)",
        r"(?is)to summarize[,:]+(.*?)(?:\n\n|\z)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("summary pattern must compile"))
    .collect()
});

/// Find an explicitly labeled summary/conclusion section.
///
/// Returns the trimmed section body, or `None` when no pattern matches.
pub fn extract_summary(text: &str) -> Option<String> {
    for pattern in SUMMARY_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(body) = caps.get(1) {
                return Some(body.as_str().trim().to_string());
            }
        }
    }
    None
}

/// Reduce `text` to something suitable for speech.
///
/// With `prefer_explicit_summary`, a labeled summary section is returned
/// verbatim (trimmed) regardless of `max_length`. Otherwise text longer than
/// `max_length` characters is truncated with [`TRUNCATION_SUFFIX`] appended,
/// and short text passes through unchanged.
pub fn summarize(text: &str, max_length: usize, prefer_explicit_summary: bool) -> String {
    if prefer_explicit_summary {
        if let Some(summary) = extract_summary(text) {
            return summary;
        }
    }

    if text.chars().count() > max_length {
        let mut out = char_prefix(text, max_length).to_string();
        out.push_str(TRUNCATION_SUFFIX);
        return out;
    }

    text.to_string()
}

/// First `max_chars` characters of `text`, respecting UTF-8 boundaries.
fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
