//! Prefix scanners for legacy values.
//!
//! Each scanner skips leading whitespace and reads the longest valid prefix,
//! ignoring whatever follows. Nothing valid at the start yields `None`.

/// Longest path a legacy value may name
pub const MAX_TOKEN_LEN: usize = 127;

fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

fn scan_unsigned_prefix(text: &str) -> Option<(u64, &str)> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let (digits, rest) = split_digits(text);
    if digits.is_empty() {
        return None;
    }
    let value = digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });
    Some((value, rest))
}

/// Signed decimal; saturates instead of wrapping
pub fn scan_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if text.starts_with(['+', '-']) && negative {
        return None;
    }
    let (magnitude, _) = scan_unsigned_prefix(text)?;
    let magnitude = i64::try_from(magnitude).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Unsigned decimal; a leading minus is not a number
pub fn scan_uint(text: &str) -> Option<u64> {
    scan_unsigned_prefix(text).map(|(value, _)| value)
}

/// Decimal fraction such as `0.5`, `2` or `.25`
pub fn scan_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let bytes = text.as_bytes();
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    text[..end].parse().ok()
}

/// First whitespace-delimited token, at most [`MAX_TOKEN_LEN`] characters
pub fn scan_token(text: &str) -> Option<&str> {
    let token = text.split_whitespace().next()?;
    let end = token
        .char_indices()
        .nth(MAX_TOKEN_LEN)
        .map_or(token.len(), |(i, _)| i);
    Some(&token[..end])
}

/// `{true,yes}` or `{false,no}`, case-insensitive
pub fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") || text.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

/// Two unsigned numbers separated by `/`, e.g. `1000/60`
pub fn scan_pair(text: &str) -> Option<(u64, u64)> {
    let (first, rest) = scan_unsigned_prefix(text)?;
    let rest = rest.strip_prefix('/')?;
    let (second, _) = scan_unsigned_prefix(rest)?;
    Some((first, second))
}
