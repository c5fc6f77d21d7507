/// Escapes text for element content and double- or single-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub const CSRF_FIELD: &str = "_token";
pub const METHOD_FIELD: &str = "_method";

pub fn csrf_field(token: &str) -> String {
    format!(
        r#"<input type="hidden" name="{CSRF_FIELD}" value="{}">"#,
        escape(token)
    )
}

/// Forms can only POST; the verb travels in a hidden field.
pub fn method_field(method: &str) -> String {
    format!(r#"<input type="hidden" name="{METHOD_FIELD}" value="{method}">"#)
}
