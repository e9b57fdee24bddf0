//! Date/time normalization and PHP-style format patterns.
//!
//! Raw date-time input arrives in several shapes: an already-canonical
//! date-time, a Unix timestamp (integer, float, or numeric string), a plain
//! `Y-M-D` calendar date, or formatted text. [`normalize`] collapses all of
//! them into one canonical `DateTime<FixedOffset>`, trying each rule in
//! strict priority order. Formatted text is described by a [`DateFormat`],
//! a PHP `date()`-token pattern translated to a chrono strftime pattern
//! before parsing.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CastError, CastResult};
use crate::value::Value;

/// A PHP `date()`-token pattern used to parse date-time text.
///
/// The default pattern is `"U"`, meaning Unix epoch seconds. Supported
/// tokens: `d j D l m n M F Y y H G h g i s u v a A U O P`, with `\` to
/// escape a literal character. Before parsing, the token sequence `.v` is
/// rewritten to `.u` (fractional-seconds microsecond marker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormat(String);

impl DateFormat {
    /// Creates a format from a PHP-style pattern string.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// The raw pattern string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Parses date-time text under this format.
    ///
    /// The pattern `"U"` requires the text to be numeric epoch seconds.
    /// Patterns without time tokens parse to midnight; patterns without an
    /// offset token are taken as UTC.
    pub fn parse(&self, text: &str) -> CastResult<DateTime<FixedOffset>> {
        let pattern = self.0.replace(".v", ".u");
        if pattern == "U" {
            return numeric_epoch(text).ok_or_else(|| self.parse_error(text));
        }

        let translated = translate(&pattern);
        if translated.has_offset {
            if let Ok(dt) = DateTime::parse_from_str(text, &translated.strftime) {
                return Ok(dt);
            }
        } else if translated.has_time {
            if let Ok(ndt) = NaiveDateTime::parse_from_str(text, &translated.strftime) {
                return Ok(ndt.and_utc().fixed_offset());
            }
        } else if let Ok(date) = NaiveDate::parse_from_str(text, &translated.strftime) {
            return Ok(midnight(date));
        }

        Err(self.parse_error(text))
    }

    fn parse_error(&self, value: &str) -> CastError {
        CastError::DateParse {
            value: value.to_string(),
            format: self.0.clone(),
        }
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self("U".to_string())
    }
}

impl From<&str> for DateFormat {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

/// Normalizes a raw value to the canonical date-time representation.
///
/// Rules, first match wins:
/// 1. an existing date-time passes through unchanged;
/// 2. integers, floats, and fully-numeric strings are Unix epoch seconds
///    (floats keep their fractional part);
/// 3. strings shaped `Y-M-D` are calendar dates at midnight UTC;
/// 4. any other string is parsed with `format`.
///
/// Anything that falls through is a fatal [`CastError::DateParse`].
pub(crate) fn normalize(value: &Value, format: &DateFormat) -> CastResult<DateTime<FixedOffset>> {
    match value {
        Value::DateTime(dt) => Ok(*dt),
        Value::Int(i) => from_epoch_seconds(*i).ok_or_else(|| out_of_range(value, format)),
        Value::Float(f) => from_epoch_seconds_f64(*f).ok_or_else(|| out_of_range(value, format)),
        Value::String(s) => {
            if let Some(dt) = numeric_epoch(s) {
                return Ok(dt);
            }
            if let Some(date) = standard_date(s) {
                return Ok(midnight(date));
            }
            format.parse(s)
        }
        other => Err(out_of_range(other, format)),
    }
}

/// Truncates a date-time to the start of its day, keeping the offset.
pub(crate) fn start_of_day(dt: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    dt.with_time(NaiveTime::MIN).single().unwrap_or(dt)
}

fn out_of_range(value: &Value, format: &DateFormat) -> CastError {
    CastError::DateParse {
        value: value.to_json().to_string(),
        format: format.pattern().to_string(),
    }
}

fn midnight(date: NaiveDate) -> DateTime<FixedOffset> {
    date.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}

fn from_epoch_seconds(secs: i64) -> Option<DateTime<FixedOffset>> {
    DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.fixed_offset())
}

fn from_epoch_seconds_f64(secs: f64) -> Option<DateTime<FixedOffset>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let mut nanos = ((secs - whole) * 1e9).round() as i64;
    let mut whole = whole as i64;
    if nanos >= 1_000_000_000 {
        whole += 1;
        nanos = 0;
    }
    DateTime::<Utc>::from_timestamp(whole, nanos as u32).map(|dt| dt.fixed_offset())
}

/// Interprets fully-numeric text as Unix epoch seconds.
fn numeric_epoch(text: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(secs) = trimmed.parse::<i64>() {
        return from_epoch_seconds(secs);
    }
    // Reject the textual forms f64::from_str accepts ("inf", "NaN", ...).
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(from_epoch_seconds_f64)
}

/// Matches the `Y-M-D` standard date shape: one or more year digits,
/// 1-2 digit month and day, nothing else.
fn standard_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(year) || !digits(month) || !digits(day) || month.len() > 2 || day.len() > 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

struct Translated {
    strftime: String,
    has_time: bool,
    has_offset: bool,
}

/// Translates a PHP `date()` pattern to a chrono strftime pattern.
///
/// Unmapped characters pass through as literals, so the translated pattern
/// must match them verbatim in the input text.
fn translate(pattern: &str) -> Translated {
    let mut strftime = String::with_capacity(pattern.len() * 2);
    let mut has_time = false;
    let mut has_offset = false;

    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    push_literal(&mut strftime, escaped);
                }
            }
            'd' => strftime.push_str("%d"),
            'j' => strftime.push_str("%-d"),
            'D' => strftime.push_str("%a"),
            'l' => strftime.push_str("%A"),
            'm' => strftime.push_str("%m"),
            'n' => strftime.push_str("%-m"),
            'M' => strftime.push_str("%b"),
            'F' => strftime.push_str("%B"),
            'Y' => strftime.push_str("%Y"),
            'y' => strftime.push_str("%y"),
            'H' => {
                strftime.push_str("%H");
                has_time = true;
            }
            'G' => {
                strftime.push_str("%-H");
                has_time = true;
            }
            'h' => {
                strftime.push_str("%I");
                has_time = true;
            }
            'g' => {
                strftime.push_str("%-I");
                has_time = true;
            }
            'i' => {
                strftime.push_str("%M");
                has_time = true;
            }
            's' => {
                strftime.push_str("%S");
                has_time = true;
            }
            'u' => {
                strftime.push_str("%6f");
                has_time = true;
            }
            'v' => {
                strftime.push_str("%3f");
                has_time = true;
            }
            'a' => {
                strftime.push_str("%P");
                has_time = true;
            }
            'A' => {
                strftime.push_str("%p");
                has_time = true;
            }
            'U' => {
                strftime.push_str("%s");
                has_time = true;
                has_offset = true;
            }
            'O' => {
                strftime.push_str("%z");
                has_offset = true;
            }
            'P' => {
                strftime.push_str("%:z");
                has_offset = true;
            }
            other => push_literal(&mut strftime, other),
        }
    }

    Translated {
        strftime,
        has_time,
        has_offset,
    }
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}
