//! Operand parsing, rounding and formatting
//!
//! Operands travel as text between inputs. These helpers convert them to
//! `f64` for arithmetic and back to the shortest decimal text afterwards.

/// Scale used to strip floating-point noise from results (12 fractional digits)
const ROUNDING_SCALE: f64 = 1e12;

/// Magnitudes at or above this print in exponent form
const EXPONENT_UPPER: f64 = 1e21;

/// Non-zero magnitudes below this print in exponent form
const EXPONENT_LOWER: f64 = 1e-6;

/// Parse an operand, including in-progress literals such as `"12."` or `"-0."`.
///
/// Like a lenient float parse, the longest numeric prefix is read, so a
/// half-deleted exponent such as `"1e+"` reads as `1`. Returns `None` when
/// there is no numeric prefix (`"Error"`, a bare `"-"`) and for NaN, so
/// callers can treat the operation as a no-op.
pub fn parse_operand(text: &str) -> Option<f64> {
    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    if magnitude.eq_ignore_ascii_case("infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // Rust also accepts "inf" and "nan"; the display never produces them
    if !magnitude.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let value: f64 = magnitude[..numeric_prefix_len(magnitude)?].parse().ok()?;
    if value.is_nan() {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Length of the leading `digits [. digits] [e [sign] digits]` run, or `None`
/// if it holds no digit
fn numeric_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut len = digits_from(0);
    let mut mantissa_digits = len;
    if bytes.get(len) == Some(&b'.') {
        let fraction = digits_from(len + 1);
        mantissa_digits += fraction;
        len += 1 + fraction;
    }
    if mantissa_digits == 0 {
        return None;
    }

    // The exponent only counts once it has a digit
    if matches!(bytes.get(len), Some(b'e') | Some(b'E')) {
        let sign = usize::from(matches!(bytes.get(len + 1), Some(b'+') | Some(b'-')));
        let exponent = digits_from(len + 1 + sign);
        if exponent > 0 {
            len += 1 + sign + exponent;
        }
    }
    Some(len)
}

/// Round a result to 12 fractional digits.
///
/// Removes representation tails such as `0.1 + 0.2 = 0.30000000000000004`.
/// Ties round toward positive infinity. Values whose scaled form overflows
/// are returned unchanged.
pub fn round_result(value: f64) -> f64 {
    let scaled = (value + f64::EPSILON) * ROUNDING_SCALE;
    if !scaled.is_finite() {
        return value;
    }

    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / ROUNDING_SCALE
}

/// Format a value as its shortest decimal text.
///
/// Very large and very small magnitudes use exponent form (`1e+21`,
/// `1.5e-7`). Negative zero prints as `"0"`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        format!("{}", value)
    }
}
