//! Loosely-typed numeric values.
//!
//! The open-data API ships coordinates as numeric strings, while restaurant
//! files written by older tooling carry plain JSON numbers. [`Coordinate`]
//! accepts both and defers coercion to the point where a number is needed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A coordinate as it appeared in the source: a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// The `0` substituted for a missing coordinate.
    #[must_use]
    pub const fn zero() -> Self {
        Self::Number(0.0)
    }

    /// Whether the value counts as absent: numeric zero or an empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Text(s) => s.is_empty(),
        }
    }

    /// Coerce to a number. Strings go through [`parse_float_prefix`];
    /// `None` for empty input or anything that would be `NaN`.
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_nan() => None,
            Self::Number(n) => Some(*n),
            Self::Text(s) if s.is_empty() => None,
            Self::Text(s) => parse_float_prefix(s),
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Parse the longest leading decimal literal of `input`.
///
/// Leading whitespace is skipped, an optional sign is accepted, and
/// `Infinity` is recognised. Trailing garbage is ignored, so `"37.7abc"`
/// yields `37.7`. Returns `None` when no digits lead the string.
#[must_use]
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Render a number the way the graph stores it: shortest round-trip form,
/// integers without a fractional part, `Infinity` spelled out.
///
/// Magnitudes below `1e-6` or from `1e21` up use exponent notation with an
/// explicit exponent sign (`1e-7`, `1.5e+21`).
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponent_form = format!("{n:e}");
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponent_form,
        };
    }
    n.to_string()
}
