//! Coercive attribute casting for raw request input.
//!
//! Given a registry of field → type-descriptor declarations, a [`Caster`]
//! converts each declared field of a raw input record (typically strings
//! from an HTTP request) into its native representation before the data is
//! validated or used:
//!
//! - primitives: `int`, `float`, `string`, `bool` — loose, never-failing
//!   coercion
//! - structures: `array`, `json`, `collection`
//! - temporal: `date`, `datetime`, `timestamp`, plus the parametric
//!   `date:<format>` / `datetime:<format>` forms carrying their own
//!   PHP-style format pattern
//!
//! Fields with unrecognized descriptors and undeclared fields pass through
//! untouched, and a null value is never coerced. Unparseable date-time
//! text is the one fatal condition — it surfaces as [`CastError`] rather
//! than being silently defaulted.
//!
//! ```
//! use attrcast::{Caster, Value};
//! use std::collections::HashMap;
//!
//! let caster = Caster::new([("age", "int"), ("active", "bool")]);
//!
//! let mut record = HashMap::new();
//! record.insert("age".to_string(), Value::from("42"));
//! record.insert("active".to_string(), Value::from("1"));
//! record.insert("name".to_string(), Value::from("ada"));
//!
//! let cast = caster.cast_record(record).unwrap();
//! assert_eq!(cast["age"], Value::Int(42));
//! assert_eq!(cast["active"], Value::Bool(true));
//! assert_eq!(cast["name"], Value::from("ada")); // undeclared: untouched
//! ```

mod cast_type;
mod caster;
mod coerce;
mod collection;
mod datetime;
mod error;
mod value;

pub use cast_type::CastType;
pub use caster::Caster;
pub use collection::Collection;
pub use datetime::DateFormat;
pub use error::{CastError, CastResult};
pub use value::Value;
