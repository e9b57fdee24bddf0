//! Cast dispatch and the record-level cast pass.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::cast_type::CastType;
use crate::coerce;
use crate::collection::Collection;
use crate::datetime::{self, DateFormat};
use crate::error::{CastError, CastResult};
use crate::value::Value;

/// Casts declared fields of a raw input record to native representations.
///
/// Configuration — the field registry and the fallback date format — is
/// fixed at construction. Each cast is then a pure function of that
/// configuration and the value it is given, so one `Caster` can be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct Caster {
    casts: HashMap<String, CastType>,
    date_format: DateFormat,
}

impl Caster {
    /// Creates a caster from field → type-descriptor declarations.
    ///
    /// Descriptors are parsed once, up front. Unrecognized descriptors are
    /// dropped from the registry, which makes their fields pass through
    /// untouched. The date format defaults to `"U"` (epoch seconds).
    pub fn new<I, K, D>(casts: I) -> Self
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: AsRef<str>,
    {
        let casts = casts
            .into_iter()
            .filter_map(|(field, descriptor)| {
                CastType::parse(descriptor.as_ref()).map(|cast| (field.into(), cast))
            })
            .collect();
        Self {
            casts,
            date_format: DateFormat::default(),
        }
    }

    /// Sets the fallback date format for `date`/`datetime`/`timestamp` fields.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<DateFormat>) -> Self {
        self.date_format = format.into();
        self
    }

    /// The configured fallback date format.
    #[must_use]
    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    /// Returns true if the field has a recognized cast declared.
    #[must_use]
    pub fn is_declared(&self, field: &str) -> bool {
        self.casts.contains_key(field)
    }

    /// Casts every declared, present field of a record.
    ///
    /// Undeclared keys pass through untouched; declared keys absent from
    /// the record are skipped, never invented. A failure on one field
    /// aborts the whole record.
    pub fn cast_record(
        &self,
        mut record: HashMap<String, Value>,
    ) -> CastResult<HashMap<String, Value>> {
        debug!(declared = self.casts.len(), "casting record");
        for (field, cast) in &self.casts {
            let Some(value) = record.remove(field) else {
                continue;
            };
            trace!(field = %field, "casting field");
            record.insert(field.clone(), self.cast_value(cast, value)?);
        }
        Ok(record)
    }

    /// Casts a single field's value per the registry.
    ///
    /// Values of undeclared fields are returned unchanged.
    pub fn cast_field(&self, field: &str, value: Value) -> CastResult<Value> {
        match self.casts.get(field) {
            Some(cast) => self.cast_value(cast, value),
            None => Ok(value),
        }
    }

    /// Casts a value to the given canonical type.
    ///
    /// `Null` short-circuits to `Null` before any dispatch.
    pub fn cast_value(&self, cast: &CastType, value: Value) -> CastResult<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        match cast {
            CastType::Int => Ok(Value::Int(coerce::to_int(&value))),
            CastType::Float => Ok(Value::Float(coerce::to_float(&value))),
            CastType::String => Ok(Value::String(coerce::to_string(&value))),
            CastType::Bool => Ok(Value::Bool(coerce::to_bool(&value))),
            CastType::Array => Ok(match value {
                Value::Array(_) => value,
                other => Value::Array(vec![other]),
            }),
            CastType::Json => decode_json(value),
            CastType::Collection => Ok(Value::Collection(Collection::wrap(value))),
            CastType::Date => {
                let dt = datetime::normalize(&value, &self.date_format)?;
                Ok(Value::DateTime(datetime::start_of_day(dt)))
            }
            CastType::DateTime => {
                Ok(Value::DateTime(datetime::normalize(&value, &self.date_format)?))
            }
            CastType::Custom(format) => Ok(Value::DateTime(datetime::normalize(&value, format)?)),
            CastType::Timestamp => {
                Ok(Value::Int(datetime::normalize(&value, &self.date_format)?.timestamp()))
            }
        }
    }
}

/// Decodes JSON text into an associative [`Value`] structure.
fn decode_json(value: Value) -> CastResult<Value> {
    match value {
        Value::String(text) => {
            let decoded: serde_json::Value = serde_json::from_str(&text)?;
            Ok(Value::from(decoded))
        }
        other => Err(CastError::JsonInput(other.type_name())),
    }
}
