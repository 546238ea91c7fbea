/// Escapes text for use in element content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
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

/// True for links worth rendering: present, non-blank and not a `#` stub.
pub(crate) fn is_real_link(link: Option<&str>) -> bool {
    link.is_some_and(|l| !l.trim().is_empty() && l.trim() != "#")
}
