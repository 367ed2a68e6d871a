//! Numeric parsers
//!
//! Both parsers read the longest valid prefix after leading whitespace and
//! return `NaN` when there is none.

use once_cell::sync::Lazy;
use regex::Regex;

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(Infinity|(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?)").expect("valid float pattern")
});

/// Parse an integer prefix of `input` in `radix` (2..=36).
///
/// Without a radix, a `0x`/`0X` prefix selects base 16 and anything else
/// base 10.
pub fn parse_int(input: &str, radix: Option<u32>) -> f64 {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let has_hex_prefix = s.starts_with("0x") || s.starts_with("0X");
    let (radix, digits) = match radix {
        None | Some(0) if has_hex_prefix => (16, &s[2..]),
        None | Some(0) => (10, s),
        Some(16) if has_hex_prefix => (16, &s[2..]),
        Some(r) if (2..=36).contains(&r) => (r, s),
        Some(_) => return f64::NAN,
    };

    let mut value = 0.0_f64;
    let mut any = false;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => {
                value = value * radix as f64 + d as f64;
                any = true;
            }
            None => break,
        }
    }

    if !any {
        return f64::NAN;
    }
    if negative { -value } else { value }
}

/// Parse a decimal floating point prefix of `input`.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let Some(m) = FLOAT_PREFIX.find(s) else {
        return f64::NAN;
    };

    let text = m.as_str();
    let (negative, unsigned) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let value = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().unwrap_or(f64::NAN)
    };
    if negative { -value } else { value }
}
