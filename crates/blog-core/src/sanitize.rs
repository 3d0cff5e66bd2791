//! HTML sanitization for user-supplied rich text.

/// Strip executable content (script tags, event handlers, `javascript:` URLs)
/// while keeping ordinary markup.
///
/// Running it over already sanitized text returns the text unchanged.
pub fn sanitize_html(input: &str) -> String {
    ammonia::clean(input)
}

/// Reduce HTML to its text content. Entities stay escaped, so the result is
/// still safe to embed in a page as-is.
pub fn plain_text(input: &str) -> String {
    ammonia::Builder::empty().clean(input).to_string()
}

/// Cut escaped text to at most `max_chars` characters without splitting an
/// entity such as `&amp;`.
pub fn truncate_escaped(text: &str, max_chars: usize) -> &str {
    let end = match text.char_indices().nth(max_chars) {
        Some((idx, _)) => idx,
        None => return text,
    };
    let head = &text[..end];

    // A '&' after the last ';' is the start of an entity that got cut.
    match (head.rfind('&'), head.rfind(';')) {
        (Some(amp), Some(semi)) if amp > semi => &head[..amp],
        (Some(amp), None) => &head[..amp],
        _ => head,
    }
}
