//! Minimal HTML helpers for the fragments the views hand to their surfaces.

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A full-width single-cell table row.
pub fn message_row(text: &str, colspan: usize, is_error: bool) -> String {
    let class = if is_error {
        "text-center text-danger"
    } else {
        "text-center"
    };
    format!(
        r#"<tr><td colspan="{}" class="{}">{}</td></tr>"#,
        colspan,
        class,
        escape_html(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"Aditya Birla <Sun> & "Life" 's"#),
            "Aditya Birla &lt;Sun&gt; &amp; &quot;Life&quot; &#39;s"
        );
        assert_eq!(escape_html("₹120.00"), "₹120.00");
    }

    #[test]
    fn test_message_row() {
        assert_eq!(
            message_row("Loading stocks...", 9, false),
            r#"<tr><td colspan="9" class="text-center">Loading stocks...</td></tr>"#
        );
        assert!(message_row("Error", 8, true).contains("text-danger"));
    }
}
