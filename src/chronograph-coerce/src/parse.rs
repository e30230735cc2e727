//! Coercion of text cells into typed values.

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use log::trace;

use chronograph_types::{DataType, PrimitiveKind, Value};
use common_config::CoercionConfig;
use common_error::{AttrError, AttrResult};

/// Drop the first decimal point and everything after it.
///
/// Lets integer columns accept decimal text: `"3.14"` becomes `"3"`.
pub fn strip_decimal_digits(text: &str) -> &str {
    match text.find('.') {
        Some(point) => &text[..point],
        None => text,
    }
}

/// Parses text into values of a requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCoercer {
    trim_numeric_whitespace: bool,
}

impl TextCoercer {
    pub fn new(config: &CoercionConfig) -> Self {
        Self {
            trim_numeric_whitespace: config.trim_numeric_whitespace,
        }
    }

    /// Parse `text` as a value of `target`.
    ///
    /// Boxed and primitive spellings of a scalar parse identically. Integer
    /// targets drop any decimal part first; booleans are `true` only for a
    /// case-insensitive `"true"` and `false` for anything else. Arrays and
    /// time-indexed sets are not coercion targets.
    pub fn parse(&self, text: &str, target: &DataType) -> AttrResult<Value> {
        match target {
            DataType::String => Ok(Value::String(text.to_string())),
            DataType::Primitive(kind) | DataType::Boxed(kind) => self.parse_scalar(text, *kind),
            DataType::BigInteger => {
                parse_big::<BigInt>(strip_decimal_digits(text), target).map(Value::BigInteger)
            }
            DataType::BigDecimal => parse_big::<BigDecimal>(text, target).map(Value::BigDecimal),
            DataType::Array(_) | DataType::Dynamic(_) => Err(AttrError::unsupported_type(
                format!("cannot parse text as {target}"),
            )),
        }
    }

    fn parse_scalar(&self, text: &str, kind: PrimitiveKind) -> AttrResult<Value> {
        let target = DataType::Primitive(kind);
        match kind {
            PrimitiveKind::Bool => Ok(Value::Bool(text.eq_ignore_ascii_case("true"))),
            PrimitiveKind::Int8 => parse_integer(text, &target).map(Value::Int8),
            PrimitiveKind::Int16 => parse_integer(text, &target).map(Value::Int16),
            PrimitiveKind::Int32 => parse_integer(text, &target).map(Value::Int32),
            PrimitiveKind::Int64 => parse_integer(text, &target).map(Value::Int64),
            PrimitiveKind::Float32 => {
                parse_float(self.float_text(text), &target).map(Value::Float32)
            }
            PrimitiveKind::Float64 => {
                parse_float(self.float_text(text), &target).map(Value::Float64)
            }
            PrimitiveKind::Char => text.chars().next().map(Value::Char).ok_or_else(|| {
                trace!("Rejected empty text for {target}");
                AttrError::empty_input(target.to_string())
            }),
        }
    }

    fn float_text<'a>(&self, text: &'a str) -> &'a str {
        if self.trim_numeric_whitespace {
            text.trim()
        } else {
            text
        }
    }
}

impl Default for TextCoercer {
    fn default() -> Self {
        Self::new(&CoercionConfig::default())
    }
}

fn parse_integer<T: FromStr>(text: &str, target: &DataType) -> AttrResult<T> {
    parse_number(strip_decimal_digits(text), target)
}

/// Only digits, sign, point and exponent, or exactly `Infinity` / `NaN`
/// after an optional sign. Rust's float grammar also takes `inf` and `nan`
/// in any case.
fn parse_float<T: FromStr>(text: &str, target: &DataType) -> AttrResult<T> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let has_word = unsigned
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E');
    if has_word && unsigned != "Infinity" && unsigned != "NaN" {
        return Err(reject(text, target));
    }
    parse_number(text, target)
}

/// Big-number parsers skip `_` separators; fixed-width integers do not.
fn parse_big<T: FromStr>(text: &str, target: &DataType) -> AttrResult<T> {
    if text.contains('_') {
        return Err(reject(text, target));
    }
    parse_number(text, target)
}

fn parse_number<T: FromStr>(text: &str, target: &DataType) -> AttrResult<T> {
    text.parse::<T>().map_err(|_| reject(text, target))
}

fn reject(text: &str, target: &DataType) -> AttrError {
    trace!("Rejected {text:?} for {target}");
    AttrError::number_format(text, target.to_string())
}
