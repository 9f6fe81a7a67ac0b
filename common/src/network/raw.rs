//! # Raw Fragment Input
//!
//! Fragments are often built from loosely-typed input (command-line tokens,
//! JSON documents). [`RawValue`] keeps the type of that input around so each
//! family can decide which construction path applies, or reject it.

use std::num::IntErrorKind;

use serde_json::Value;

use crate::utils::hex;

#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Int(i128),
    Float(f64),
    Str(String),
    Bool(bool),
    Null,
    /// Arrays, objects, anything structured. Holds the kind's name.
    Composite(&'static str),
}

impl RawValue {
    /// Human-readable name of the input type, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Int(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::Str(_) => "string",
            RawValue::Bool(_) => "boolean",
            RawValue::Null => "null",
            RawValue::Composite(kind) => kind,
        }
    }

    /// Reads a command-line token.
    ///
    /// The token is parsed as a JSON scalar so `10` is an integer, `1.5` a
    /// float and `"10"` a string. Anything that is not valid JSON is taken as
    /// a bare string, so `00ff` needs no quoting.
    ///
    /// Bare exponent forms that are also hex partitions (`1e3`, `12E4`) stay
    /// strings.
    pub fn from_token(token: &str) -> Self {
        match serde_json::from_str::<Value>(token) {
            Ok(value) => match RawValue::from(value) {
                RawValue::Float(_) if hex::is_ipv6_partition(token) => RawValue::Str(token.to_string()),
                raw => raw,
            },
            Err(_) => RawValue::Str(token.to_string()),
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => match integer_literal(&n.to_string()) {
                Some(i) => RawValue::Int(i),
                None => RawValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => RawValue::Str(s),
            Value::Array(_) => RawValue::Composite("array"),
            Value::Object(_) => RawValue::Composite("object"),
        }
    }
}

/// Reads a JSON integer literal, saturating at the `i128` bounds.
///
/// Relies on serde_json's `arbitrary_precision` keeping the source text, so
/// literals past `u64::MAX` are still integers. Fractions and exponent forms
/// are not integer literals.
fn integer_literal(text: &str) -> Option<i128> {
    match text.parse::<i128>() {
        Ok(i) => Some(i),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i128::MAX),
            IntErrorKind::NegOverflow => Some(i128::MIN),
            _ => None,
        },
    }
}

impl From<i128> for RawValue {
    fn from(value: i128) -> Self {
        RawValue::Int(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(i128::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Str(value)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
