//! Escaping for text, attribute and style contexts.
//!
//! Every user-supplied value is interpolated through one of these before it
//! reaches the output buffer, so no value can close a tag, an attribute or
//! the embedded `<style>` block.

/// Escape for text and attribute contexts.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Sanitize a value interpolated into a style context (inline `style`
/// attribute or `<style>` block). CSS has no entity escaping, so the
/// characters that could terminate the declaration, close the rule block
/// or close the surrounding markup are removed outright.
pub fn sanitize_style_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '{' | '}' | ';'))
        .collect()
}
