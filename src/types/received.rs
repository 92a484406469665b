//! Human-readable descriptions of offending input.
//!
//! Every issue carries a `received` string derived from the value that failed.
//! The derivation lives here and nowhere else, so all actions describe input
//! the same way.
//!
//! # Examples
//!
//! ```
//! use vali_rail::{stringify, Value};
//!
//! assert_eq!(stringify(&Value::from("abc")), "\"abc\"");
//! assert_eq!(stringify(&Value::Number(f64::NAN)), "NaN");
//! assert_eq!(stringify(&Value::object([("a", Value::Null)])), "Object");
//! ```
use crate::types::value::Value;

/// Describes a value for use in the `received` field of an issue.
///
/// Strings are quoted, numbers, bigints and booleans print as literals,
/// objects print as their constructor name (`null` without a prototype),
/// functions print as `Function`, and `null`, `undefined` and symbols print
/// as literal words.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Number(n) => format_number(*n),
        Value::BigInt(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".into(),
        Value::Undefined => "undefined".into(),
        Value::Symbol(_) => "symbol".into(),
        Value::Function(_) => "Function".into(),
        Value::Array(_) => "Array".into(),
        Value::Date(_) => "Date".into(),
        Value::Object(o) => o.constructor().unwrap_or("null").into(),
    }
}

/// Formats a number the way the host prints it.
///
/// ```
/// use vali_rail::types::received::format_number;
///
/// assert_eq!(format_number(123.45), "123.45");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".into();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }
    if n == 0.0 {
        return "0".into();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{n}");
    }

    // Rust prints `1e21` / `1.5e-7`; the host wants an explicit exponent sign.
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
