//! Loose primitive coercion table, exercised through the public cast API.

use attrcast::{CastType, Caster, Collection, Value};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn cast(descriptor: &str, value: Value) -> Value {
    let cast = CastType::parse(descriptor).unwrap();
    Caster::new(Vec::<(String, String)>::new())
        .cast_value(&cast, value)
        .unwrap()
}

// ── int ──────────────────────────────────────────────────────────

#[test]
fn int_from_numeric_strings() {
    assert_eq!(cast("int", Value::from("1")), Value::Int(1));
    assert_eq!(cast("int", Value::from("-42")), Value::Int(-42));
    assert_eq!(cast("int", Value::from("  8 ")), Value::Int(8));
}

#[test]
fn int_takes_the_leading_numeric_prefix() {
    assert_eq!(cast("int", Value::from("12abc")), Value::Int(12));
    assert_eq!(cast("int", Value::from("12.9xyz")), Value::Int(12));
    assert_eq!(cast("int", Value::from("1e3")), Value::Int(1000));
}

#[test]
fn int_from_non_numeric_string_is_zero() {
    assert_eq!(cast("int", Value::from("abc")), Value::Int(0));
    assert_eq!(cast("int", Value::from("")), Value::Int(0));
}

#[test]
fn int_truncates_floats() {
    assert_eq!(cast("int", Value::Float(4.9)), Value::Int(4));
    assert_eq!(cast("int", Value::Float(-4.9)), Value::Int(-4));
}

#[test]
fn int_from_bool_and_containers() {
    assert_eq!(cast("int", Value::Bool(true)), Value::Int(1));
    assert_eq!(cast("int", Value::Bool(false)), Value::Int(0));
    assert_eq!(cast("int", Value::Array(vec![])), Value::Int(0));
    assert_eq!(cast("int", Value::Array(vec![Value::Int(9)])), Value::Int(1));
}

// ── float ────────────────────────────────────────────────────────

#[test]
fn float_from_strings() {
    assert_eq!(cast("float", Value::from("4.0")), Value::Float(4.0));
    assert_eq!(cast("float", Value::from("-0.5")), Value::Float(-0.5));
    assert_eq!(cast("float", Value::from("2.5e2")), Value::Float(250.0));
    assert_eq!(cast("float", Value::from("abc")), Value::Float(0.0));
}

#[test]
fn float_widens_ints() {
    assert_eq!(cast("double", Value::Int(3)), Value::Float(3.0));
    assert_eq!(cast("real", Value::Bool(true)), Value::Float(1.0));
}

// ── string ───────────────────────────────────────────────────────

#[test]
fn string_from_numbers() {
    assert_eq!(cast("string", Value::Int(2)), Value::from("2"));
    assert_eq!(cast("string", Value::Float(4.0)), Value::from("4"));
    assert_eq!(cast("string", Value::Float(4.5)), Value::from("4.5"));
}

#[test]
fn string_from_bools() {
    assert_eq!(cast("string", Value::Bool(true)), Value::from("1"));
    assert_eq!(cast("string", Value::Bool(false)), Value::from(""));
}

#[test]
fn string_from_datetime_uses_datetime_text() {
    let dt = Utc.with_ymd_and_hms(1969, 7, 20, 22, 56, 0).unwrap();
    assert_eq!(
        cast("string", Value::from(dt)),
        Value::from("1969-07-20 22:56:00")
    );
}

#[test]
fn string_from_containers_is_json_text() {
    assert_eq!(
        cast("string", Value::Array(vec![Value::Int(1), Value::Int(2)])),
        Value::from("[1,2]")
    );
}

// ── bool ─────────────────────────────────────────────────────────

#[test]
fn bool_falsy_values() {
    assert_eq!(cast("bool", Value::Int(0)), Value::Bool(false));
    assert_eq!(cast("bool", Value::Float(0.0)), Value::Bool(false));
    assert_eq!(cast("bool", Value::from("")), Value::Bool(false));
    assert_eq!(cast("bool", Value::from("0")), Value::Bool(false));
    assert_eq!(cast("bool", Value::Array(vec![])), Value::Bool(false));
    assert_eq!(
        cast("bool", Value::Collection(Collection::new())),
        Value::Bool(false)
    );
}

#[test]
fn bool_truthy_values() {
    assert_eq!(cast("bool", Value::Int(-1)), Value::Bool(true));
    assert_eq!(cast("bool", Value::from("1")), Value::Bool(true));
    assert_eq!(cast("boolean", Value::from("0.0")), Value::Bool(true));
    assert_eq!(cast("boolean", Value::from("false")), Value::Bool(true));
    assert_eq!(cast("bool", Value::Array(vec![Value::Null])), Value::Bool(true));
}

// ── idempotence ──────────────────────────────────────────────────

#[test]
fn primitive_casts_are_idempotent() {
    for (descriptor, raw) in [
        ("int", Value::from("12abc")),
        ("float", Value::from("4.25")),
        ("string", Value::Float(4.0)),
        ("bool", Value::from("0")),
    ] {
        let once = cast(descriptor, raw);
        let twice = cast(descriptor, once.clone());
        assert_eq!(twice, once, "{descriptor} not idempotent");
    }
}
