use vali_rail::coerce::{self, CoercionError};
use vali_rail::{Date, Function, Object, Symbol, Value};

fn number(value: impl Into<Value>) -> f64 {
    coerce::to_number(&value.into()).unwrap()
}

#[test]
fn to_number_parses_numeric_strings() {
    assert_eq!(number(""), 0.0);
    assert_eq!(number("  12.5\n"), 12.5);
    assert_eq!(number("1e3"), 1000.0);
    assert_eq!(number(".5"), 0.5);
    assert_eq!(number("-7"), -7.0);
    assert_eq!(number("0b101"), 5.0);
    assert_eq!(number("0o17"), 15.0);
    assert_eq!(number("0xff"), 255.0);
    assert_eq!(number("-Infinity"), f64::NEG_INFINITY);
}

#[test]
fn to_number_trims_only_host_whitespace() {
    assert_eq!(number("\u{a0}\u{feff}\u{2028} 8\t\u{3000}"), 8.0);
    assert_eq!(number("\u{2009}-3\u{205f}"), -3.0);
    assert!(number("\u{85}1").is_nan());
    assert!(number("1\u{85}").is_nan());
    assert!(number("\u{200b}1").is_nan());
    assert!(coerce::to_bigint(&Value::from("\u{85}1")).is_err());
    assert_eq!(coerce::to_bigint(&Value::from("\u{a0}12\n")), Ok(12));
}

#[test]
fn to_number_rejects_non_literals_as_nan() {
    assert!(number("12px").is_nan());
    assert!(number("-0x1").is_nan());
    assert!(number("0x").is_nan());
    assert!(number("infinity").is_nan());
    assert!(number("1e").is_nan());
    assert!(number(".").is_nan());
}

#[test]
fn to_number_of_other_values() {
    assert!(number(Value::Undefined).is_nan());
    assert_eq!(number(Value::Null), 0.0);
    assert_eq!(number(true), 1.0);
    assert_eq!(number(Value::BigInt(9)), 9.0);
    assert_eq!(number(Date::from_millis(1234.0)), 1234.0);
    assert!(number(Date::invalid()).is_nan());
    assert_eq!(number(Value::array([5])), 5.0);
    assert_eq!(number(Value::array(Vec::<Value>::new())), 0.0);
    assert!(number(Value::array([1, 2])).is_nan());
    assert!(number(Value::object([("a", Value::from(1))])).is_nan());
    assert!(number(Function::new("f")).is_nan());
}

#[test]
fn to_number_throws_on_symbols_and_bare_objects() {
    assert_eq!(coerce::to_number(&Value::from(Symbol::new())), Err(CoercionError::Symbol));
    let bare = Value::from(Object::null_prototype([("a", Value::from(1))]));
    assert_eq!(coerce::to_number(&bare), Err(CoercionError::NullPrototype));
}

#[test]
fn to_bigint_accepts_integer_forms() {
    assert_eq!(coerce::to_bigint(&Value::from(" 42 ")), Ok(42));
    assert_eq!(coerce::to_bigint(&Value::from("")), Ok(0));
    assert_eq!(coerce::to_bigint(&Value::from("+8")), Ok(8));
    assert_eq!(coerce::to_bigint(&Value::from("0x10")), Ok(16));
    assert_eq!(coerce::to_bigint(&Value::from(1e3)), Ok(1000));
    assert_eq!(coerce::to_bigint(&Value::from(true)), Ok(1));
    assert_eq!(coerce::to_bigint(&Value::from(Date::from_millis(5.0))), Ok(5));
    assert_eq!(coerce::to_bigint(&Value::array(["12"])), Ok(12));
}

#[test]
fn to_bigint_failures() {
    assert_eq!(coerce::to_bigint(&Value::from(123.45)), Err(CoercionError::NonIntegral(123.45)));
    assert!(matches!(
        coerce::to_bigint(&Value::Number(f64::NAN)),
        Err(CoercionError::NonIntegral(_))
    ));
    assert_eq!(coerce::to_bigint(&Value::Null), Err(CoercionError::Nullish("null")));
    assert_eq!(coerce::to_bigint(&Value::Undefined), Err(CoercionError::Nullish("undefined")));
    assert_eq!(
        coerce::to_bigint(&Value::from("1.0")),
        Err(CoercionError::InvalidBigIntLiteral("1.0".into()))
    );
    assert!(coerce::to_bigint(&Value::from("-0x10")).is_err());
    assert_eq!(coerce::to_bigint(&Value::from(2f64.powi(127))), Err(CoercionError::Overflow));
    assert!(coerce::to_bigint(&Value::object([("a", Value::Null)])).is_err());
}

#[test]
fn to_string_follows_host_rules() {
    let s = |v: Value| coerce::to_string(&v).unwrap();

    assert_eq!(s(Value::from(1e21)), "1e+21");
    assert_eq!(s(Value::BigInt(-3)), "-3");
    assert_eq!(s(Value::from(false)), "false");
    assert_eq!(s(Value::Undefined), "undefined");
    assert_eq!(s(Value::from(Symbol::with_description("id"))), "Symbol(id)");
    assert_eq!(s(Value::from(Symbol::new())), "Symbol()");
    assert_eq!(s(Value::from(Function::new("run"))), "function run() { [native code] }");
    assert_eq!(s(Value::array([Value::array([1, 2]), Value::from(3)])), "1,2,3");
    assert_eq!(s(Value::array([Value::Undefined, Value::Null])), ",");
    assert_eq!(s(Value::from(Object::instance_of("User", Vec::<(String, Value)>::new()))), "[object Object]");
    assert_eq!(s(Value::from(Date::invalid())), "Invalid Date");
    assert_eq!(
        s(Value::from(Date::from_millis(0.0))),
        "Thu Jan 01 1970 00:00:00 GMT+0000 (Coordinated Universal Time)"
    );
}

#[test]
fn to_string_throws_on_symbol_elements_and_bare_objects() {
    let with_symbol = Value::array([Value::from(1), Value::from(Symbol::new())]);
    assert_eq!(coerce::to_string(&with_symbol), Err(CoercionError::Symbol));

    let bare = Value::from(Object::null_prototype(Vec::<(String, Value)>::new()));
    assert_eq!(coerce::to_string(&bare), Err(CoercionError::NullPrototype));
}

#[test]
fn to_boolean_falsy_set() {
    for falsy in [
        Value::from(""),
        Value::from(0),
        Value::from(-0.0),
        Value::BigInt(0),
        Value::Number(f64::NAN),
        Value::from(false),
        Value::Null,
        Value::Undefined,
    ] {
        assert!(!coerce::to_boolean(&falsy), "{falsy:?} should be falsy");
    }

    for truthy in [
        Value::from("0"),
        Value::from(" "),
        Value::from(-1),
        Value::BigInt(-1),
        Value::array(Vec::<Value>::new()),
        Value::from(Object::default()),
        Value::from(Date::invalid()),
        Value::from(Symbol::new()),
    ] {
        assert!(coerce::to_boolean(&truthy), "{truthy:?} should be truthy");
    }
}

#[test]
fn to_date_parses_supported_formats() {
    let millis = |s: &str| coerce::to_date(&Value::from(s)).unwrap().timestamp_millis();

    assert_eq!(millis("2024-05-06"), 1_714_953_600_000.0);
    assert_eq!(millis("2024-05-06T10:20:30Z"), 1_714_990_830_000.0);
    assert_eq!(millis("2024-05-06T10:20:30"), 1_714_990_830_000.0);
    assert_eq!(millis("2024-05-06T12:00:00+02:00"), 1_714_989_600_000.0);
    assert_eq!(millis("Mon, 06 May 2024 00:00:00 +0000"), 1_714_953_600_000.0);
    assert_eq!(millis("2024"), 1_704_067_200_000.0);
    assert_eq!(millis("2024-02"), 1_706_745_600_000.0);
    assert!(millis("2024-02-30").is_nan());
    assert!(millis("tomorrow").is_nan());
}

#[test]
fn to_date_of_other_values() {
    let date = |v: Value| coerce::to_date(&v).unwrap();

    assert_eq!(date(Value::Null).timestamp_millis(), 0.0);
    assert_eq!(date(Value::from(true)).timestamp_millis(), 1.0);
    assert_eq!(date(Value::from(86_400_000)).timestamp_millis(), 86_400_000.0);
    assert!(!date(Value::Undefined).is_valid());
    assert!(!date(Value::object([("a", Value::Null)])).is_valid());
    assert_eq!(coerce::to_date(&Value::BigInt(1)), Err(CoercionError::BigIntToNumber));
    assert_eq!(coerce::to_date(&Value::from(Symbol::new())), Err(CoercionError::Symbol));
}

#[test]
fn coercion_errors_display_reasons() {
    assert_eq!(
        CoercionError::NonIntegral(1.5).to_string(),
        "the number 1.5 cannot be converted to a bigint"
    );
    assert_eq!(CoercionError::Nullish("null").to_string(), "cannot convert null to a bigint");
}
