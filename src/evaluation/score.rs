//! Numeric interpretation of field text and formatting of the total

use std::fmt;

/// Parse the numeric value of a field.
///
/// Leading whitespace is skipped and the longest decimal prefix is used, so
/// `"12abc"` reads as 12. Text without a numeric prefix, as well as a zero or
/// NaN result, contributes 0.
pub fn parse_field_value(text: &str) -> f64 {
    let value = leading_float(text).unwrap_or(0.0);
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

fn leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start_matches(is_leading_blank);
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse().ok()
}

/// Whitespace and line terminators skipped ahead of a number
fn is_leading_blank(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Sum of the field values, rendered with exactly two fractional digits
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TotalScore(pub f64);

impl TotalScore {
    /// Sum field texts, treating unparseable text as zero
    pub fn sum<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        Self(texts.into_iter().map(parse_field_value).sum())
    }
}

impl fmt::Display for TotalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return f.write_str("NaN");
        }
        if x.is_infinite() {
            return f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
        }

        let sign = if x < 0.0 { "-" } else { "" };
        let magnitude = x.abs();

        // Past 1e21 fixed notation gives way to exponent notation
        if magnitude >= 1e21 {
            let exp = format!("{magnitude:e}");
            return match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(f, "{sign}{mantissa}e+{power}")
                }
                _ => write!(f, "{sign}{exp}"),
            };
        }

        // Exact midpoints (x.xx5) are odd multiples of 1/8 and round away from zero
        let eighths = magnitude * 8.0;
        if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
            let digits = format!("{magnitude:.3}");
            let kept = digits.strip_suffix('5').unwrap_or(&digits);
            return write!(f, "{sign}{}", increment_last_digit(kept));
        }
        write!(f, "{sign}{magnitude:.2}")
    }
}

/// Add one unit in the last place of a decimal string, carrying leftwards
fn increment_last_digit(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    let mut carry = true;
    for b in out.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
                break;
            }
        }
    }
    if carry {
        out.insert(0, b'1');
    }
    String::from_utf8(out).unwrap_or_default()
}
