// src/core/sanitize.rs

/// `magus_cloud` → `Magus Cloud`. Only the first letter of each word changes.
pub fn display_name(item_id: &str) -> String {
    let mut out = String::with_capacity(item_id.len());
    for (i, word) in item_id.split('_').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Remove characters that are illegal in file names on common platforms.
pub fn sanitize_file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' { out.push(ch); last_us = false; }
        else if (ch.is_whitespace() || ch == '_') && !last_us { out.push('_'); last_us = true; }
    }
    out.trim_matches('_').to_string()
}
