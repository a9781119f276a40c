//! Utility functions for the tournament service

use chrono::{DateTime, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Escape HTML markup in a display name so it renders as text.
///
/// Only `&`, `<` and `>` are escaped, so quotes and apostrophes in ordinary
/// names are kept. An `&` that already starts a character reference such as
/// `&amp;` or `&#39;` is left alone. Surrounding whitespace is trimmed. A
/// `max_len` of 0 means unlimited; otherwise the name is cut to `max_len`
/// characters before escaping so an entity is never split.
pub fn sanitize_name(raw: &str, max_len: usize) -> String {
    let trimmed = raw.trim();
    let limited: String = if max_len > 0 {
        trimmed.chars().take(max_len).collect()
    } else {
        trimmed.to_string()
    };

    let mut escaped = String::with_capacity(limited.len());
    for (i, ch) in limited.char_indices() {
        match ch {
            '&' if starts_entity(&limited[i + 1..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// `rest` follows an `&`: true for `name;`, `#123;` or `#x1F;`
fn starts_entity(rest: &str) -> bool {
    let Some(end) = rest.find(';') else {
        return false;
    };
    let body = &rest[..end];
    if let Some(num) = body.strip_prefix('#') {
        match num.strip_prefix(['x', 'X']) {
            Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()),
        }
    } else {
        !body.is_empty() && body.chars().all(|c| c.is_ascii_alphanumeric())
    }
}
