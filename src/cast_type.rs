//! Type descriptor parsing.

use serde::{Deserialize, Serialize};

use crate::datetime::DateFormat;

/// Canonical tag for a declared cast.
///
/// Parsed from the descriptor strings a field registry declares, e.g.
/// `"int"`, `"boolean"`, `"datetime"`, or the parametric
/// `"date:<format>"` / `"datetime:<format>"` forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastType {
    Int,
    Float,
    String,
    Bool,
    Array,
    Json,
    Collection,
    Date,
    DateTime,
    Timestamp,
    /// A `date:`/`datetime:`-prefixed descriptor carrying its own format.
    Custom(DateFormat),
}

impl CastType {
    /// Parses a type descriptor string.
    ///
    /// The `date:`/`datetime:` prefixes are matched case-sensitively on
    /// the raw descriptor; everything else is matched after trimming and
    /// lower-casing. Returns `None` for unrecognized descriptors, which
    /// the dispatcher treats as pass-through.
    #[must_use]
    pub fn parse(descriptor: &str) -> Option<Self> {
        if let Some(format) = descriptor.strip_prefix("date:") {
            return Some(Self::Custom(DateFormat::new(format)));
        }
        if let Some(format) = descriptor.strip_prefix("datetime:") {
            return Some(Self::Custom(DateFormat::new(format)));
        }

        match descriptor.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Some(Self::Int),
            "real" | "float" | "double" => Some(Self::Float),
            "string" => Some(Self::String),
            "bool" | "boolean" => Some(Self::Bool),
            "array" => Some(Self::Array),
            "json" => Some(Self::Json),
            "collection" => Some(Self::Collection),
            "date" => Some(Self::Date),
            "datetime" => Some(Self::DateTime),
            "timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }
}
