/// Reads an integer the way lenient form input is usually read: leading
/// whitespace and an optional sign are skipped, then the longest run of ASCII
/// digits is taken. Anything after the digits is ignored.
///
/// Zero and inputs without digits both yield `None`, so callers can treat
/// them as "absent" and substitute their own default. Values outside the
/// `i64` range saturate.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let mut out: i64 = 0;
    for b in digits[..len].bytes() {
        let d = i64::from(b - b'0');
        out = if negative {
            out.saturating_mul(10).saturating_sub(d)
        } else {
            out.saturating_mul(10).saturating_add(d)
        };
    }

    if out == 0 {
        None
    } else {
        Some(out)
    }
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
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

/// Normalizes a mount path to a leading slash and no trailing slash. Route
/// pattern characters are rejected since the path is mounted literally.
pub fn normalize_base_path(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if !trimmed.starts_with('/') {
        return Err("expected a path starting with '/'".to_string());
    }
    let stripped = trimmed.trim_end_matches('/');
    if stripped.is_empty() {
        return Err("path must not be the root".to_string());
    }
    if stripped.contains(['*', ':']) {
        return Err("path must not contain route patterns ('*' or ':')".to_string());
    }
    Ok(stripped.to_string())
}
