//! HTML escaping for rendered navigation.

use std::borrow::Cow;

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape only when asked to; otherwise borrow the input unchanged.
pub(crate) fn maybe_escape(s: &str, escape: bool) -> Cow<'_, str> {
    if escape {
        Cow::Owned(escape_html(s))
    } else {
        Cow::Borrowed(s)
    }
}
