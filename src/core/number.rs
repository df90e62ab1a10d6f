//! Conversions between entry text and `f64`.
//!
//! The calculator keeps its operands as text and only interprets them when
//! it has to compute or render. These functions define that interpretation:
//! how text is read as a number, how a computed number is written back as
//! canonical text, and how over-long text is shortened for the display.

/// Literal shown in place of a value that is not a finite number.
pub const ERROR_TEXT: &str = "Error";

/// Interpret entry text as a number.
///
/// Blank text reads as `0`. `Infinity` with an optional sign reads as the
/// matching infinity. Plain decimals and exponent forms are accepted,
/// including a dangling or leading point (`"5."`, `".5"`). Everything else,
/// `"Error"` included, reads as NaN.
///
/// ```rust
/// use tallyho::core::number::parse_number;
///
/// assert_eq!(parse_number("12.5"), 12.5);
/// assert_eq!(parse_number("7."), 7.0);
/// assert_eq!(parse_number(""), 0.0);
/// assert!(parse_number("Error").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    if unsigned == "Infinity" {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // Rust also accepts "inf" and "NaN"; those are not numbers here.
    let leads_with_mantissa = unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.');
    let only_numeric = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !leads_with_mantissa || !only_numeric {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

/// Write a number as canonical text: the shortest digits that round-trip.
///
/// Magnitudes in `[1e-6, 1e21)` are written in plain notation, everything
/// else as `d.ddde+N`. Negative zero is written as `"0"`.
///
/// ```rust
/// use tallyho::core::number::number_to_text;
///
/// assert_eq!(number_to_text(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(number_to_text(1e21), "1e+21");
/// assert_eq!(number_to_text(0.000001), "0.000001");
/// assert_eq!(number_to_text(5e-7), "5e-7");
/// ```
pub fn number_to_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let shortest = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // value = 0.d1d2...dk * 10^n
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let e = n - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{lead}e{e_sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{e_sign}{}", e.abs())
        }
    };

    format!("{sign}{body}")
}

/// Normalized scientific notation with exactly `digits` fractional digits
/// and an explicitly signed exponent.
///
/// Exact ties round away from zero, so `1.25` to one digit is `1.3e+0`.
///
/// ```rust
/// use tallyho::core::number::to_exponential;
///
/// assert_eq!(to_exponential(1.2345e20, 6), "1.234500e+20");
/// assert_eq!(to_exponential(-0.00000042, 2), "-4.20e-7");
/// assert_eq!(to_exponential(2.5, 0), "3e+0");
/// ```
pub fn to_exponential(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return number_to_text(value);
    }
    if let Some(rounded) = round_tie_up(value, digits) {
        return rounded;
    }

    let formatted = format!("{:.*e}", digits, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => format!("{mantissa}e{}", signed_exponent(exponent)),
        None => formatted,
    }
}

fn signed_exponent(exponent: &str) -> String {
    if exponent.starts_with('-') {
        exponent.to_string()
    } else {
        format!("+{exponent}")
    }
}

/// Scientific notation for a value sitting exactly halfway between two
/// `digits`-digit mantissas, rounded away from zero. `None` when the value
/// is not a tie; std formatting rounds those correctly already.
fn round_tie_up(value: f64, digits: usize) -> Option<String> {
    // Extended precision prints exact digits; a tie shows as 5 then zeros.
    let extended = format!("{:.*e}", digits + 30, value.abs());
    let (mantissa, exponent) = extended.split_once('e')?;
    let mut exponent: i32 = exponent.parse().ok()?;

    let all: Vec<u8> = mantissa.bytes().filter(|b| *b != b'.').collect();
    let (kept, tail) = all.split_at(digits + 1);
    let (first, rest) = tail.split_first()?;
    if *first != b'5' || rest.iter().any(|b| *b != b'0') {
        return None;
    }

    let mut kept = kept.to_vec();
    let mut carried = true;
    for d in kept.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carried = false;
            break;
        }
    }
    if carried {
        kept.insert(0, b'1');
        kept.pop();
        exponent += 1;
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (lead, frac) = kept.split_at(1);
    let lead = std::str::from_utf8(lead).ok()?;
    let frac = std::str::from_utf8(frac).ok()?;
    let exponent = signed_exponent(&exponent.to_string());
    if frac.is_empty() {
        Some(format!("{sign}{lead}e{exponent}"))
    } else {
        Some(format!("{sign}{lead}.{frac}e{exponent}"))
    }
}

/// Render entry text for the display.
///
/// Text no longer than `max_len` is shown verbatim. Longer text is read as a
/// number and shown in scientific notation with `digits` fractional digits,
/// or as [`ERROR_TEXT`] when it does not read as a finite number. The input
/// is never modified.
///
/// ```rust
/// use tallyho::core::number::format_display;
///
/// assert_eq!(format_display("1234", 16, 6), "1234");
/// assert_eq!(format_display("12345678901234567", 16, 6), "1.234568e+16");
/// ```
pub fn format_display(text: &str, max_len: usize, digits: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }

    let value = parse_number(text);
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }
    to_exponential(value, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_partial_decimals() {
        assert_eq!(parse_number("0."), 0.0);
        assert_eq!(parse_number(".25"), 0.25);
        assert_eq!(parse_number("-3."), -3.0);
        assert_eq!(parse_number("007"), 7.0);
    }

    #[test]
    fn parse_accepts_exponent_forms() {
        assert_eq!(parse_number("1e+21"), 1e21);
        assert_eq!(parse_number("5e-7"), 5e-7);
        assert_eq!(parse_number("  42  "), 42.0);
    }

    #[test]
    fn parse_reads_signed_infinity() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("+Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert!(parse_number("Error").is_nan());
        assert!(parse_number("Error5").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("1.2.3").is_nan());
    }

    #[test]
    fn text_of_integers_is_plain() {
        assert_eq!(number_to_text(10.0), "10");
        assert_eq!(number_to_text(-8.0), "-8");
        assert_eq!(number_to_text(100.0), "100");
        assert_eq!(number_to_text(123456789012345680000.0), "123456789012345680000");
    }

    #[test]
    fn text_of_fractions_is_shortest_round_trip() {
        assert_eq!(number_to_text(0.5), "0.5");
        assert_eq!(number_to_text(12.34), "12.34");
        assert_eq!(number_to_text(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(number_to_text(-0.05), "-0.05");
    }

    #[test]
    fn text_switches_to_exponent_outside_plain_range() {
        assert_eq!(number_to_text(1e21), "1e+21");
        assert_eq!(number_to_text(1.5e300), "1.5e+300");
        assert_eq!(number_to_text(1.5e-7), "1.5e-7");
        assert_eq!(number_to_text(-2e-10), "-2e-10");
    }

    #[test]
    fn text_of_special_values() {
        assert_eq!(number_to_text(0.0), "0");
        assert_eq!(number_to_text(-0.0), "0");
        assert_eq!(number_to_text(f64::NAN), "NaN");
        assert_eq!(number_to_text(f64::INFINITY), "Infinity");
        assert_eq!(number_to_text(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn exponential_signs_the_exponent() {
        assert_eq!(to_exponential(1.0, 6), "1.000000e+0");
        assert_eq!(to_exponential(0.00012, 3), "1.200e-4");
        assert_eq!(to_exponential(-98765.0, 1), "-9.9e+4");
    }

    #[test]
    fn exponential_rounds_exact_ties_up() {
        assert_eq!(to_exponential(1234566500000000000.0, 6), "1.234567e+18");
        assert_eq!(to_exponential(1.25, 1), "1.3e+0");
        assert_eq!(to_exponential(2.5, 0), "3e+0");
        assert_eq!(to_exponential(-2.5, 0), "-3e+0");
    }

    #[test]
    fn exponential_tie_carries_into_exponent() {
        assert_eq!(to_exponential(9.5, 0), "1e+1");
        assert_eq!(to_exponential(99.5, 1), "1.0e+2");
    }

    #[test]
    fn exponential_non_ties_round_to_nearest() {
        // 0.15 is stored slightly below the tie.
        assert_eq!(to_exponential(0.15, 0), "1e-1");
        assert_eq!(to_exponential(1.26, 1), "1.3e+0");
        assert_eq!(to_exponential(1.24, 1), "1.2e+0");
    }

    #[test]
    fn display_keeps_short_text_verbatim() {
        assert_eq!(format_display("0.", 16, 6), "0.");
        assert_eq!(format_display("Error", 16, 6), "Error");
        assert_eq!(format_display("1234567890123456", 16, 6), "1234567890123456");
    }

    #[test]
    fn display_shortens_long_numbers() {
        assert_eq!(format_display("12345678901234567", 16, 6), "1.234568e+16");
        assert_eq!(format_display("0.30000000000000004", 16, 6), "3.000000e-1");
        assert_eq!(format_display("123456789012345680000", 16, 2), "1.23e+20");
    }

    #[test]
    fn display_reports_long_non_numbers_as_error() {
        assert_eq!(format_display("ErrorErrorErrorError", 16, 6), "Error");
        assert_eq!(format_display("12345678901234567", 4, 6), "1.234568e+16");
        assert_eq!(format_display("-Infinity", 4, 6), "Error");
    }
}
