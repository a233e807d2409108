//! Lenient floating-point field parsing
//!
//! Reads the longest numeric literal at the start of a field, the way C's
//! `strtod` does, and ignores whatever follows it. Accepted forms after
//! optional leading whitespace and sign:
//!
//! - decimal: `12`, `1.5`, `.5`, `3.`, `6.02e23`
//! - hexadecimal: `0x1.8p3`
//! - `inf`, `infinity`, `nan` (any case)
//!
//! A field with no such prefix, or whose value overflows or underflows to
//! zero, yields `None`.

/// Parse the leading floating-point literal of `field`
pub fn parse_leading_f64(field: &[u8]) -> Option<f64> {
    let start = field
        .iter()
        .position(|&b| !is_c_space(b))
        .unwrap_or(field.len());
    let text = &field[start..];

    let (negative, body) = match text.first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = parse_special(body)
        .or_else(|| parse_hex(body))
        .or_else(|| parse_decimal(body))?;

    Some(if negative { -magnitude } else { magnitude })
}

fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn starts_with_ignore_case(text: &[u8], prefix: &[u8]) -> bool {
    text.len() >= prefix.len() && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}

fn parse_special(body: &[u8]) -> Option<f64> {
    if starts_with_ignore_case(body, b"inf") {
        Some(f64::INFINITY)
    } else if starts_with_ignore_case(body, b"nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

fn count_digits(bytes: &[u8], radix: u32) -> usize {
    bytes
        .iter()
        .take_while(|&&b| (b as char).is_digit(radix))
        .count()
}

/// Length of an exponent suffix (`e-12`, `p+3`), or 0 if there is none
fn exponent_len(bytes: &[u8], marker: u8) -> usize {
    match bytes.first() {
        Some(b) if b.to_ascii_lowercase() == marker => {}
        _ => return 0,
    }
    let sign = matches!(bytes.get(1), Some(b'+') | Some(b'-')) as usize;
    let digits = count_digits(&bytes[1 + sign..], 10);
    if digits == 0 {
        0
    } else {
        1 + sign + digits
    }
}

/// Reject results that `strtod` reports as out of range
fn in_range(value: f64, nonzero_mantissa: bool) -> Option<f64> {
    if value.is_infinite() || (value == 0.0 && nonzero_mantissa) {
        None
    } else {
        Some(value)
    }
}

fn parse_decimal(body: &[u8]) -> Option<f64> {
    let int_digits = count_digits(body, 10);
    let mut end = int_digits;
    let mut frac_digits = 0;

    if body.get(end) == Some(&b'.') {
        frac_digits = count_digits(&body[end + 1..], 10);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    let nonzero = body[..end].iter().any(|b| matches!(b, b'1'..=b'9'));
    end += exponent_len(&body[end..], b'e');

    let literal = std::str::from_utf8(&body[..end]).ok()?;
    in_range(literal.parse().ok()?, nonzero)
}

fn parse_hex(body: &[u8]) -> Option<f64> {
    if !starts_with_ignore_case(body, b"0x") {
        return None;
    }
    let digits = &body[2..];

    let mut mantissa = 0.0f64;
    let mut exponent: i64 = 0;
    let mut count = 0;
    let mut pos = 0;
    let mut seen_point = false;

    while let Some(&b) = digits.get(pos) {
        if b == b'.' && !seen_point {
            seen_point = true;
        } else if let Some(d) = (b as char).to_digit(16) {
            mantissa = mantissa * 16.0 + d as f64;
            if seen_point {
                exponent -= 4;
            }
            count += 1;
        } else {
            break;
        }
        pos += 1;
    }
    // "0x" without digits reads as the decimal "0"
    if count == 0 {
        return None;
    }

    let exp_len = exponent_len(&digits[pos..], b'p');
    if exp_len > 0 {
        let text = std::str::from_utf8(&digits[pos + 1..pos + exp_len]).ok()?;
        let saturated = if text.starts_with('-') { i64::MIN } else { i64::MAX };
        exponent = exponent.saturating_add(text.parse::<i64>().unwrap_or(saturated));
    }

    let exponent = exponent.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    in_range(mantissa * 2f64.powi(exponent), mantissa != 0.0)
}
