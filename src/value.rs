//! The opaque value type shared by callables, the print port and the host
//! shim.

use std::fmt;

use crate::error::HostError;
use crate::host::date::JsDate;
use crate::host::regexp::JsRegExp;

// ============================================================================
// Core Value Type
// ============================================================================

/// Opaque value passed through callables and the print port.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
    Date(JsDate),
    RegExp(JsRegExp),
}

impl Value {
    /// Name of the variant, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::RegExp(_) => "regexp",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Borrow the string payload
    pub fn as_str(&self) -> Result<&str, HostError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(HostError::type_mismatch("string", other.type_name())),
        }
    }

    /// Extract the numeric payload
    pub fn as_number(&self) -> Result<f64, HostError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(HostError::type_mismatch("number", other.type_name())),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

/// Render a number the way a JS host prints it
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        exponent_form(n)
    } else if n == n.trunc() {
        format!("{}", n as i128)
    } else {
        format!("{n}")
    }
}

/// `1e+21`, `-2.5e-7`: shortest mantissa, explicit exponent sign
fn exponent_form(n: f64) -> String {
    let s = format!("{n:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => write!(f, "{s}"),
            Value::Date(d) => write!(f, "{d}"),
            Value::RegExp(r) => write!(f, "{r}"),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<JsDate> for Value {
    fn from(d: JsDate) -> Self {
        Value::Date(d)
    }
}

impl From<JsRegExp> for Value {
    fn from(r: JsRegExp) -> Self {
        Value::RegExp(r)
    }
}
