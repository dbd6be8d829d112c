//! Numeric form fields.
//!
//! Answers arrive as text captured from form inputs. They are read the way a
//! browser `parseFloat` reads them: leading whitespace is skipped and the
//! longest decimal prefix wins (`"12abc"` is 12). Text with no numeric
//! prefix is kept as a present field with value 0. An empty string is the
//! same as the field being absent.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Serialize, Serializer};

/// A parsed numeric answer.
///
/// `parsed` keeps the sign as entered so validation can reject negative
/// input; `value` is what the estimator sees and is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quantity {
    parsed: f64,
}

impl Quantity {
    pub fn new(value: f64) -> Self {
        Self {
            parsed: if value.is_finite() { value } else { 0.0 },
        }
    }

    /// Parse form text. Never fails: text without a numeric prefix is 0.
    pub fn parse(text: &str) -> Self {
        Self::new(parse_leading_float(text).unwrap_or(0.0))
    }

    /// Value used for estimation. Negative input is treated as malformed.
    pub fn value(self) -> f64 {
        if self.parsed > 0.0 {
            self.parsed
        } else {
            0.0
        }
    }

    /// Value as entered, sign included.
    pub fn parsed(self) -> f64 {
        self.parsed
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Quantity {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

/// Longest-prefix decimal parse: `[+-]digits[.digits][(e|E)[+-]digits]`.
///
/// Returns `None` when the text has no digits before the first
/// non-numeric character.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - (end + 1);
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.parsed)
    }
}

/// `deserialize_with` helper for `Option<Quantity>` fields.
///
/// Accepts JSON numbers, numeric text, empty text (absent) and null (absent).
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Quantity>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalQuantityVisitor)
}

struct OptionalQuantityVisitor;

impl<'de> Visitor<'de> for OptionalQuantityVisitor {
    type Value = Option<Quantity>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or numeric text")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(OptionalQuantityVisitor)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(Quantity::new(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(Quantity::new(v as f64)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(Quantity::new(v as f64)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Quantity::parse(v)))
        }
    }
}
