//! Property-based tests for the cast invariants.
//!
//! - null in, null out for every recognized descriptor
//! - primitive coercions are idempotent
//! - timestamp/datetime round-trips recover epoch seconds
//! - the array cast always yields an array, and never re-wraps one

use attrcast::{CastType, Caster, Value};
use proptest::prelude::*;

const DESCRIPTORS: &[&str] = &[
    "int",
    "integer",
    "real",
    "float",
    "double",
    "string",
    "bool",
    "boolean",
    "array",
    "json",
    "collection",
    "date",
    "datetime",
    "timestamp",
    "date:Y-m-d",
    "datetime:Y-m-d H:i:s",
];

fn caster() -> Caster {
    Caster::new(Vec::<(String, String)>::new()).with_date_format("Y-m-d H:i:s")
}

fn descriptor_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(DESCRIPTORS)
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e12..1.0e12f64).prop_map(Value::Float),
        "[a-zA-Z0-9 .:-]{0,30}".prop_map(Value::from),
    ]
}

// Epoch seconds well inside chrono's representable range.
fn epoch_strategy() -> impl Strategy<Value = i64> {
    -10_000_000_000i64..10_000_000_000i64
}

proptest! {
    #[test]
    fn null_casts_to_null_for_every_descriptor(descriptor in descriptor_strategy()) {
        let cast = CastType::parse(descriptor).unwrap();
        prop_assert_eq!(caster().cast_value(&cast, Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn int_cast_is_idempotent(value in scalar_strategy()) {
        let cast = CastType::parse("int").unwrap();
        let once = caster().cast_value(&cast, value).unwrap();
        let twice = caster().cast_value(&cast, once.clone()).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn string_cast_is_idempotent(value in scalar_strategy()) {
        let cast = CastType::parse("string").unwrap();
        let once = caster().cast_value(&cast, value).unwrap();
        let twice = caster().cast_value(&cast, once.clone()).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn bool_cast_is_idempotent(value in scalar_strategy()) {
        let cast = CastType::parse("bool").unwrap();
        let once = caster().cast_value(&cast, value).unwrap();
        let twice = caster().cast_value(&cast, once.clone()).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn timestamp_round_trip_recovers_epoch_seconds(t in epoch_strategy()) {
        let caster = caster();
        let ts = CastType::parse("timestamp").unwrap();
        let dt = CastType::parse("datetime").unwrap();

        let as_ts = caster.cast_value(&ts, Value::Int(t)).unwrap();
        prop_assert_eq!(&as_ts, &Value::Int(t));
        let as_dt = caster.cast_value(&dt, as_ts).unwrap();
        let back = caster.cast_value(&ts, as_dt).unwrap();
        prop_assert_eq!(back, Value::Int(t));
    }

    #[test]
    fn array_cast_always_yields_an_array(value in scalar_strategy()) {
        let cast = CastType::parse("array").unwrap();
        let caster = caster();
        let once = caster.cast_value(&cast, value.clone()).unwrap();
        let items = once.as_array().expect("array cast must yield an array");
        prop_assert_eq!(items, &[value][..]);

        // Re-casting never wraps again.
        let twice = caster.cast_value(&cast, once.clone()).unwrap();
        prop_assert_eq!(twice, once);
    }
}
