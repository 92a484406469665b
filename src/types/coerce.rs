//! Standard host conversions between [`Value`] representations.
//!
//! These are the conversions the `to_*` transformations build on. Each either
//! produces the target representation or a [`CoercionError`] describing why the
//! host would have thrown. A `NaN` or invalid-date result is *not* an error at
//! this level; the transformations decide what counts as failure.
use crate::types::received::format_number;
use crate::types::value::{Date, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use core::fmt;

/// Reasons a host conversion throws instead of producing a value.
#[derive(Debug, Clone, PartialEq)]
pub enum CoercionError {
    /// Symbols have no implicit numeric or bigint form.
    Symbol,
    /// Objects created without a prototype have no primitive form.
    NullPrototype,
    /// `null` or `undefined` reached a bigint conversion.
    Nullish(&'static str),
    /// A number with a fractional part, or a non-finite number, reached a bigint conversion.
    NonIntegral(f64),
    /// A string that is not an integer literal reached a bigint conversion.
    InvalidBigIntLiteral(String),
    /// A bigint reached a conversion that only accepts numbers.
    BigIntToNumber,
    /// The integer does not fit the bigint representation.
    Overflow,
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol => f.write_str("cannot convert a symbol value"),
            Self::NullPrototype => f.write_str("cannot convert object to primitive value"),
            Self::Nullish(kind) => write!(f, "cannot convert {kind} to a bigint"),
            Self::NonIntegral(n) => {
                write!(f, "the number {} cannot be converted to a bigint", format_number(*n))
            }
            Self::InvalidBigIntLiteral(s) => write!(f, "cannot convert {s} to a bigint"),
            Self::BigIntToNumber => f.write_str("cannot convert a bigint value to a number"),
            Self::Overflow => f.write_str("integer out of range"),
        }
    }
}

impl std::error::Error for CoercionError {}

/// Converts a value to a number.
///
/// ```
/// use vali_rail::{coerce, Value};
///
/// assert_eq!(coerce::to_number(&Value::from(" 0x1F ")), Ok(31.0));
/// assert_eq!(coerce::to_number(&Value::Null), Ok(0.0));
/// assert!(coerce::to_number(&Value::from("12abc")).unwrap().is_nan());
/// ```
pub fn to_number(value: &Value) -> Result<f64, CoercionError> {
    match value {
        Value::Undefined => Ok(f64::NAN),
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => Ok(*n),
        Value::BigInt(n) => Ok(*n as f64),
        Value::String(s) => Ok(string_to_number(s)),
        Value::Symbol(_) => Err(CoercionError::Symbol),
        Value::Date(d) => Ok(d.timestamp_millis()),
        Value::Array(_) | Value::Object(_) | Value::Function(_) => {
            to_string(value).map(|s| string_to_number(&s))
        }
    }
}

/// Converts a value to a bigint.
///
/// ```
/// use vali_rail::{coerce, Value};
///
/// assert_eq!(coerce::to_bigint(&Value::from("-42")), Ok(-42));
/// assert!(coerce::to_bigint(&Value::from(1.5)).is_err());
/// ```
pub fn to_bigint(value: &Value) -> Result<i128, CoercionError> {
    match value {
        Value::Undefined => Err(CoercionError::Nullish("undefined")),
        Value::Null => Err(CoercionError::Nullish("null")),
        Value::Bool(b) => Ok(i128::from(*b)),
        Value::BigInt(n) => Ok(*n),
        Value::Number(n) => number_to_bigint(*n),
        Value::String(s) => string_to_bigint(s),
        Value::Symbol(_) => Err(CoercionError::Symbol),
        Value::Date(d) => number_to_bigint(d.timestamp_millis()),
        Value::Array(_) | Value::Object(_) | Value::Function(_) => {
            to_string(value).and_then(|s| string_to_bigint(&s))
        }
    }
}

/// Converts a value to its string form.
///
/// ```
/// use vali_rail::{coerce, Value};
///
/// let arr = Value::array([Value::from(1), Value::Null, Value::from("x")]);
/// assert_eq!(coerce::to_string(&arr).unwrap(), "1,,x");
/// assert_eq!(coerce::to_string(&Value::object([("a", Value::Null)])).unwrap(), "[object Object]");
/// ```
pub fn to_string(value: &Value) -> Result<String, CoercionError> {
    match value {
        Value::Undefined => Ok("undefined".into()),
        Value::Null => Ok("null".into()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(format_number(*n)),
        Value::BigInt(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Symbol(sym) => Ok(format!("Symbol({})", sym.description().unwrap_or_default())),
        Value::Function(func) => Ok(format!("function {}() {{ [native code] }}", func.name())),
        Value::Date(d) => Ok(d.to_string()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| match item {
                    Value::Null | Value::Undefined => Ok(String::new()),
                    Value::Symbol(_) => Err(CoercionError::Symbol),
                    other => to_string(other),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.join(","))
        }
        Value::Object(o) => match o.constructor() {
            Some(_) => Ok("[object Object]".into()),
            None => Err(CoercionError::NullPrototype),
        },
    }
}

/// Converts a value to a boolean. Never fails.
///
/// ```
/// use vali_rail::{coerce, Value};
///
/// assert!(!coerce::to_boolean(&Value::from("")));
/// assert!(coerce::to_boolean(&Value::from("false")));
/// ```
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !(n.is_nan() || *n == 0.0),
        Value::BigInt(n) => *n != 0,
        Value::String(s) => !s.is_empty(),
        Value::Symbol(_)
        | Value::Function(_)
        | Value::Array(_)
        | Value::Object(_)
        | Value::Date(_) => true,
    }
}

/// Converts a value to a date. Unparseable input yields [`Date::invalid`].
///
/// ```
/// use vali_rail::{coerce, Value};
///
/// let d = coerce::to_date(&Value::from("2024-05-06")).unwrap();
/// assert_eq!(d.timestamp_millis(), 1714953600000.0);
/// assert!(!coerce::to_date(&Value::from("invalid")).unwrap().is_valid());
/// ```
pub fn to_date(value: &Value) -> Result<Date, CoercionError> {
    match value {
        Value::Date(d) => Ok(*d),
        Value::Undefined => Ok(Date::invalid()),
        Value::Null => Ok(Date::from_millis(0.0)),
        Value::Bool(b) => Ok(Date::from_millis(if *b { 1.0 } else { 0.0 })),
        Value::Number(n) => Ok(Date::from_millis(*n)),
        Value::String(s) => Ok(parse_date(s)),
        Value::BigInt(_) => Err(CoercionError::BigIntToNumber),
        Value::Symbol(_) => Err(CoercionError::Symbol),
        Value::Array(_) | Value::Object(_) | Value::Function(_) => {
            to_string(value).map(|s| parse_date(&s))
        }
    }
}

/// Host white space and line terminators. Narrower than
/// [`char::is_whitespace`], which also accepts U+0085.
fn is_host_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn trim_host(s: &str) -> &str {
    s.trim_matches(is_host_whitespace)
}

fn radix_prefix(s: &str) -> Option<(u32, &str)> {
    let mut chars = s.chars();
    if chars.next() != Some('0') {
        return None;
    }
    match chars.next() {
        Some('x' | 'X') => Some((16, &s[2..])),
        Some('o' | 'O') => Some((8, &s[2..])),
        Some('b' | 'B') => Some((2, &s[2..])),
        _ => None,
    }
}

fn is_decimal_literal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits_ok = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !digits_ok(int_part) || !digits_ok(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && digits_ok(exp)
        }
    }
}

fn string_to_number(s: &str) -> f64 {
    let s = trim_host(s);
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some((radix, digits)) = radix_prefix(s) {
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN);
    }
    if is_decimal_literal(s) {
        s.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn number_to_bigint(n: f64) -> Result<i128, CoercionError> {
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(CoercionError::NonIntegral(n));
    }
    if n.abs() >= 2f64.powi(127) {
        return Err(CoercionError::Overflow);
    }
    Ok(n as i128)
}

fn string_to_bigint(raw: &str) -> Result<i128, CoercionError> {
    let s = trim_host(raw);
    if s.is_empty() {
        return Ok(0);
    }
    let invalid = || CoercionError::InvalidBigIntLiteral(raw.to_owned());

    if let Some((radix, digits)) = radix_prefix(s) {
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(invalid());
        }
        return i128::from_str_radix(digits, radix).map_err(|_| CoercionError::Overflow);
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    s.parse::<i128>().map_err(|_| CoercionError::Overflow)
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses the date string forms the host reliably understands. Zoneless
/// date-times are read as UTC.
fn parse_date(raw: &str) -> Date {
    let s = trim_host(raw);

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Date::from_datetime(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Date::from_datetime(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Date::from_datetime(naive.and_utc());
        }
    }
    let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let candidate = match s.split('-').collect::<Vec<_>>().as_slice() {
        [year] if year.len() == 4 && digits_only(year) => format!("{year}-01-01"),
        [year, month] if year.len() == 4 && month.len() == 2 && digits_only(year) && digits_only(month) => {
            format!("{year}-{month}-01")
        }
        _ => s.to_owned(),
    };
    if let Some(naive) = NaiveDate::parse_from_str(&candidate, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Date::from_datetime(naive.and_utc());
    }
    Date::invalid()
}
