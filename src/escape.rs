//! String escaping for JSON string bodies
//!
//! Produces the text that goes between the surrounding double quotes of a
//! JSON string, without the quotes themselves.

/// Escape a raw string for embedding inside a double-quoted JSON string.
///
/// Uses the serde_json string encoder and strips the quotes it adds.
/// serde_json never escapes `/`, so slashes come out raw.
pub fn json_escape(value: &str) -> String {
    match serde_json::to_string(value) {
        Ok(encoded) => strip_quotes(&encoded).to_string(),
        Err(_) => escape_manual(value),
    }
}

/// Substitution-based escaping, used when the encoder is unavailable.
///
/// Backslash goes first so later replacements are not escaped twice.
/// Other control characters pass through unchanged.
pub fn escape_manual(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
        .replace('\n', "\\n")
        .replace('"', "\\\"")
        .replace('\u{8}', "\\b")
        .replace('\u{c}', "\\f")
}

/// Rewrite every non-ASCII character of an already escaped string as
/// lowercase `\uXXXX` UTF-16 code units.
pub fn escape_non_ascii(escaped: &str) -> String {
    if escaped.is_ascii() {
        return escaped.to_string();
    }

    let mut out = String::with_capacity(escaped.len() + 16);
    let mut units = [0u16; 2];
    for c in escaped.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

fn strip_quotes(encoded: &str) -> &str {
    encoded
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(encoded)
}
