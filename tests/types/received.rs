use vali_rail::types::received::format_number;
use vali_rail::{stringify, Date, Function, Object, Symbol, Value};

#[test]
fn strings_are_double_quoted_without_escaping() {
    assert_eq!(stringify(&Value::from("")), "\"\"");
    assert_eq!(stringify(&Value::from("say \"hi\"")), "\"say \"hi\"\"");
}

#[test]
fn numbers_print_like_the_host() {
    assert_eq!(stringify(&Value::from(42)), "42");
    assert_eq!(stringify(&Value::from(-1.5)), "-1.5");
    assert_eq!(stringify(&Value::Number(f64::NAN)), "NaN");
    assert_eq!(stringify(&Value::Number(f64::INFINITY)), "Infinity");
    assert_eq!(stringify(&Value::Number(-0.0)), "0");
}

#[test]
fn exponent_form_uses_explicit_sign() {
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(2.5e22), "2.5e+22");
    assert_eq!(format_number(1e-7), "1e-7");
    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(0.000001), "0.000001");
}

#[test]
fn literals_and_words() {
    assert_eq!(stringify(&Value::BigInt(-12)), "-12");
    assert_eq!(stringify(&Value::from(true)), "true");
    assert_eq!(stringify(&Value::Null), "null");
    assert_eq!(stringify(&Value::Undefined), "undefined");
    assert_eq!(stringify(&Value::from(Symbol::with_description("id"))), "symbol");
}

#[test]
fn containers_print_their_constructor() {
    assert_eq!(stringify(&Value::from(Function::new("run"))), "Function");
    assert_eq!(stringify(&Value::array([1, 2])), "Array");
    assert_eq!(stringify(&Value::from(Date::from_millis(0.0))), "Date");
    assert_eq!(stringify(&Value::object([("a", Value::from(1))])), "Object");
    assert_eq!(
        stringify(&Value::from(Object::instance_of("User", [("id", Value::from(1))]))),
        "User"
    );
    assert_eq!(
        stringify(&Value::from(Object::null_prototype(Vec::<(String, Value)>::new()))),
        "null"
    );
}
