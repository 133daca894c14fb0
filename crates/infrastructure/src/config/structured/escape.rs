//! Quoting of string values for the TOML writer.
//!
//! Printable ASCII without `"` or `\` is copied verbatim. Anything else goes
//! through the escaper: the usual C escapes for control characters,
//! backslash-escaped quote and backslash, and `\0xHH` for every remaining
//! ASCII control byte. Non-ASCII characters are UTF-8 text in TOML and are
//! written as they are.

#[inline]
fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

#[inline]
fn needs_escaping(byte: u8) -> bool {
    byte.is_ascii() && (!is_printable(byte) || byte == b'"' || byte == b'\\')
}

/// `text` as a double-quoted TOML string
pub fn quote(text: &str) -> String {
    if text.bytes().any(needs_escaping) {
        quote_escaped(text)
    } else {
        quote_verbatim(text)
    }
}

fn quote_verbatim(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    out.push_str(text);
    out.push('"');
    out
}

fn quote_escaped(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2 + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_ascii_control() => out.push_str(&format!("\\0x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
