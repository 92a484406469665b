//! Dynamic host values carried through a pipeline.
//!
//! Pipelines accept arbitrary input, so the dataset carries a [`Value`] rather
//! than a concrete Rust type. Schemas and actions inspect the variant to decide
//! whether the value conforms to what they expect.
//!
//! # Examples
//!
//! ```
//! use vali_rail::Value;
//!
//! let v = Value::from("hello");
//! assert_eq!(v.type_of(), "string");
//! assert_eq!(v.as_str(), Some("hello"));
//!
//! let n: Value = 42.into();
//! assert_eq!(n.as_f64(), Some(42.0));
//! ```
use chrono::{DateTime, TimeZone, Utc};
use core::fmt;

/// Largest absolute millisecond offset a date may represent.
pub const MAX_DATE_MILLIS: f64 = 8.64e15;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
    Function(Function),
    Array(Vec<Value>),
    Object(Object),
    Date(Date),
}

impl Value {
    /// Creates a plain object from key/value pairs, preserving their order.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Object(Object::new(entries))
    }

    /// Creates an array value.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Returns the host `typeof` label for this value.
    ///
    /// ```
    /// use vali_rail::Value;
    ///
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::BigInt(1).type_of(), "bigint");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::BigInt(_) => "bigint",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Function(_) => "function",
            Self::Null | Self::Array(_) | Self::Object(_) | Self::Date(_) => "object",
        }
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bigint(&self) -> Option<i128> {
        match self {
            Self::BigInt(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_date(&self) -> Option<&Date> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns `true` for `NaN` numbers.
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_nan())
    }
}

/// A symbol with an optional description. Symbols compare by description only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Symbol {
    description: Option<String>,
}

impl Symbol {
    pub fn new() -> Self {
        Self { description: None }
    }

    pub fn with_description(description: impl Into<String>) -> Self {
        Self { description: Some(description.into()) }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Stand-in for a host callable. Only its name is observable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Function {
    name: String,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// An anonymous function.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An object with ordered properties and an optional constructor name.
///
/// A `None` constructor models an object created without a prototype, which
/// has no string conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    constructor: Option<String>,
    properties: Vec<(String, Value)>,
}

impl Object {
    /// Creates a plain `Object`.
    pub fn new<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self {
            constructor: Some("Object".into()),
            properties: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Creates an instance of a named class.
    pub fn instance_of<K, I>(constructor: impl Into<String>, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self { constructor: Some(constructor.into()), ..Self::new(entries) }
    }

    /// Creates an object without a prototype.
    pub fn null_prototype<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self { constructor: None, ..Self::new(entries) }
    }

    pub fn constructor(&self) -> Option<&str> {
        self.constructor.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new(core::iter::empty::<(String, Value)>())
    }
}

/// A point in time with millisecond precision, or the invalid-date sentinel.
///
/// The millisecond count is the source of truth. It covers the full host
/// range of ±8.64e15 ms, which reaches past the last year `chrono` can
/// represent, so conversion to [`DateTime`] is partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    millis: Option<i64>,
}

impl Date {
    /// The invalid-date sentinel.
    #[inline]
    pub const fn invalid() -> Self {
        Self { millis: None }
    }

    /// Builds a date from milliseconds since the Unix epoch.
    ///
    /// Non-finite or out-of-range values produce the invalid date. Fractional
    /// milliseconds are truncated toward zero.
    ///
    /// ```
    /// use vali_rail::Date;
    ///
    /// assert!(Date::from_millis(8.64e15).is_valid());
    /// assert!(!Date::from_millis(8.64e15 + 1.0).is_valid());
    /// assert_eq!(Date::from_millis(-1.9).timestamp_millis(), -1.0);
    /// ```
    pub fn from_millis(millis: f64) -> Self {
        if !millis.is_finite() || millis.abs() > MAX_DATE_MILLIS {
            return Self::invalid();
        }
        Self { millis: Some(millis.trunc() as i64) }
    }

    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self::from_millis(datetime.timestamp_millis() as f64)
    }

    /// Current wall clock time.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.millis.is_some()
    }

    /// Milliseconds since the epoch, `NaN` for the invalid date.
    pub fn timestamp_millis(&self) -> f64 {
        self.millis.map_or(f64::NAN, |ms| ms as f64)
    }

    /// The same instant as a `chrono` value.
    ///
    /// `None` for the invalid date and for valid dates beyond the years
    /// `chrono` supports.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.millis.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    /// Host ISO form, `YYYY-MM-DDTHH:mm:ss.sssZ`. Years outside `0..=9999`
    /// use a signed six-digit year. `None` for the invalid date.
    ///
    /// ```
    /// use vali_rail::Date;
    ///
    /// assert_eq!(Date::from_millis(0.0).to_iso_string().as_deref(), Some("1970-01-01T00:00:00.000Z"));
    /// assert_eq!(
    ///     Date::from_millis(8.64e15).to_iso_string().as_deref(),
    ///     Some("+275760-09-13T00:00:00.000Z")
    /// );
    /// ```
    pub fn to_iso_string(&self) -> Option<String> {
        let t = CivilTime::from_millis(self.millis?);
        let year = if (0..=9999).contains(&t.year) {
            format!("{:04}", t.year)
        } else if t.year < 0 {
            format!("-{:06}", -t.year)
        } else {
            format!("+{:06}", t.year)
        };
        Some(format!(
            "{year}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            t.month, t.day, t.hour, t.minute, t.second, t.millisecond
        ))
    }
}

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_NAMES: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Proleptic Gregorian calendar fields of a UTC instant.
struct CivilTime {
    year: i64,
    month: u32,
    day: u32,
    /// 0 is Sunday.
    weekday: usize,
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,
}

impl CivilTime {
    /// Days-to-civil conversion on 400-year eras, valid for any `i64` day count
    /// the date range produces.
    fn from_millis(ms: i64) -> Self {
        let days = ms.div_euclid(MILLIS_PER_DAY);
        let time = ms.rem_euclid(MILLIS_PER_DAY);

        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
        let year = yoe + era * 400 + i64::from(month <= 2);

        Self {
            year,
            month,
            day,
            // 1970-01-01 was a Thursday.
            weekday: (days + 4).rem_euclid(7) as usize,
            hour: time / 3_600_000,
            minute: time / 60_000 % 60,
            second: time / 1_000 % 60,
            millisecond: time % 1_000,
        }
    }
}

/// Host `String(date)` form, always in UTC.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(ms) = self.millis else {
            return f.write_str("Invalid Date");
        };
        let t = CivilTime::from_millis(ms);
        let sign = if t.year < 0 { "-" } else { "" };
        write!(
            f,
            "{} {} {:02} {sign}{:04} {:02}:{:02}:{:02} GMT+0000 (Coordinated Universal Time)",
            WEEKDAY_NAMES[t.weekday],
            MONTH_NAMES[t.month as usize - 1],
            t.day,
            t.year.abs(),
            t.hour,
            t.minute,
            t.second,
        )
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(n: $ty) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, isize, usize);

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i128> for Value {
    #[inline]
    fn from(n: i128) -> Self {
        Self::BigInt(n)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Self::Symbol(s)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Self::Date(d)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Date(dt.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Undefined
    }
}
