//! Rich-text markup for calltip content.
//!
//! Calltips render a minimal rich-text subset; bold is the only tag the
//! crate itself produces. Malformed markup in caller-supplied text is
//! displayed as-is - how a toolkit renders it is the toolkit's rule,
//! not ours.

/// Wrap text in bold tags.
pub fn bold(text: &str) -> String {
    format!("<b>{}</b>", text)
}

/// Make the function name in a signature bold.
///
/// Everything before the first `(` is wrapped in bold tags. Text with
/// no parenthesis, or one at the very start, comes back unmodified.
pub fn highlight_function_name(rich_text: &str) -> String {
    match rich_text.find('(') {
        Some(i) if i > 0 => format!("{}{}", bold(&rich_text[..i]), &rich_text[i..]),
        _ => rich_text.to_string(),
    }
}
