//! Temperature conversion math and input validation

use thiserror::Error;

/// Lowest physically possible temperature in Celsius
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

/// Lowest physically possible temperature in Fahrenheit
pub const ABSOLUTE_ZERO_F: f64 = -459.67;

/// Error types for conversion input validation
///
/// The `Display` strings are the exact banner messages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Validation Error: Input must be a number.")]
    NotANumber,

    #[error("Physics Error: Below Absolute Zero (-273.15°C) is impossible.")]
    BelowAbsoluteZero,
}

/// Convert Celsius to Fahrenheit, rejecting temperatures below absolute zero
pub fn celsius_to_fahrenheit(celsius: f64) -> Result<f64, ConversionError> {
    if celsius < ABSOLUTE_ZERO_C {
        return Err(ConversionError::BelowAbsoluteZero);
    }
    Ok(celsius * 9.0 / 5.0 + 32.0)
}

/// Convert Celsius to Kelvin, rejecting temperatures below absolute zero
pub fn celsius_to_kelvin(celsius: f64) -> Result<f64, ConversionError> {
    if celsius < ABSOLUTE_ZERO_C {
        return Err(ConversionError::BelowAbsoluteZero);
    }
    Ok(celsius - ABSOLUTE_ZERO_C)
}

/// Convert Fahrenheit to Celsius, rejecting temperatures below absolute zero
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> Result<f64, ConversionError> {
    if fahrenheit < ABSOLUTE_ZERO_F {
        return Err(ConversionError::BelowAbsoluteZero);
    }
    Ok((fahrenheit - 32.0) * 5.0 / 9.0)
}

/// Whether the temperature is at or below the freezing point of water
pub fn is_freezing(celsius: f64) -> bool {
    celsius <= 0.0
}

/// Parse the leading numeric prefix of a string as a float.
///
/// Permissive parsing: leading whitespace is skipped, trailing non-numeric
/// text is ignored, so `"12abc"` parses as `12`. An exponent is only consumed
/// when well-formed (`"1e3"` is 1000, `"1e"` is 1). Returns `None` when no
/// numeric prefix exists at all.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        // A bare "." or "+." is not a number
        if int_digits == 0 && !bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
            return None;
        }
        end += 1;
        let frac_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        frac_digits = end - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digit_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        // Only consume the exponent if it has digits
        if exp_end > exp_digit_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
