//! Dates and times as format-string text.
//!
//! [`TemporalFormat`] pairs a `chrono` strftime pattern with the value type it reads and
//! writes. The aliases [`DateFormat`], [`TimeFormat`] and [`DateTimeFormat`] default to
//! `%Y-%m-%d`, `%H:%M:%S%.3f` and `%Y-%m-%dT%H:%M:%S%.3f`.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Shift {
//!     #[serde(with = "serde_symbolic::temporal::date")]
//!     day: NaiveDate,
//!     #[serde(with = "serde_symbolic::temporal::time")]
//!     starts: NaiveTime,
//! }
//!
//! let shift = Shift {
//!     day: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
//!     starts: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
//! };
//! let json = serde_json::to_string(&shift).unwrap();
//! assert_eq!(json, r#"{"day":"2024-03-09","starts":"08:30:00.000"}"#);
//! ```
//!
//! A custom pattern:
//!
//! ```rust
//! use serde_symbolic::temporal::DateFormat;
//!
//! let format = DateFormat::new("%d.%m.%Y");
//! let mut de = serde_json::Deserializer::from_str(r#""09.03.2024""#);
//! let date = format.deserialize(&mut de).unwrap();
//! assert_eq!(format.format(&date).unwrap(), "09.03.2024");
//! ```

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::{self, DeserializeSeed, Visitor};
use serde::{ser, Deserializer, Serializer};
use std::borrow::Cow;
use std::fmt::{self, Write};
use std::marker::PhantomData;
use tracing::trace;

/// A `chrono` value that can be read and written with a strftime pattern.
pub trait Temporal: Copy + fmt::Debug {
    const DEFAULT_PATTERN: &'static str;

    /// What the value is, for error messages.
    const DESCRIPTION: &'static str;

    fn parse_with(input: &str, pattern: &str) -> chrono::ParseResult<Self>;

    fn write_with(&self, pattern: &str, out: &mut String) -> fmt::Result;
}

impl Temporal for NaiveDate {
    const DEFAULT_PATTERN: &'static str = "%Y-%m-%d";
    const DESCRIPTION: &'static str = "a date";

    fn parse_with(input: &str, pattern: &str) -> chrono::ParseResult<Self> {
        NaiveDate::parse_from_str(input, pattern)
    }

    fn write_with(&self, pattern: &str, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format(pattern))
    }
}

impl Temporal for NaiveTime {
    const DEFAULT_PATTERN: &'static str = "%H:%M:%S%.3f";
    const DESCRIPTION: &'static str = "a time";

    fn parse_with(input: &str, pattern: &str) -> chrono::ParseResult<Self> {
        NaiveTime::parse_from_str(input, pattern)
    }

    fn write_with(&self, pattern: &str, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format(pattern))
    }
}

impl Temporal for NaiveDateTime {
    const DEFAULT_PATTERN: &'static str = "%Y-%m-%dT%H:%M:%S%.3f";
    const DESCRIPTION: &'static str = "a date and time";

    fn parse_with(input: &str, pattern: &str) -> chrono::ParseResult<Self> {
        NaiveDateTime::parse_from_str(input, pattern)
    }

    fn write_with(&self, pattern: &str, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.format(pattern))
    }
}

/// A strftime pattern for values of type `T`.
pub struct TemporalFormat<T> {
    pattern: Cow<'static, str>,
    marker: PhantomData<fn() -> T>,
}

pub type DateFormat = TemporalFormat<NaiveDate>;
pub type TimeFormat = TemporalFormat<NaiveTime>;
pub type DateTimeFormat = TemporalFormat<NaiveDateTime>;

impl<T: Temporal> TemporalFormat<T> {
    #[must_use]
    pub const fn new(pattern: &'static str) -> Self {
        TemporalFormat {
            pattern: Cow::Borrowed(pattern),
            marker: PhantomData,
        }
    }

    /// A format with a pattern built at runtime.
    #[must_use]
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        TemporalFormat {
            pattern: Cow::Owned(pattern.into()),
            marker: PhantomData,
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Writes `value` with the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] when the pattern is not valid strftime or asks
    /// for fields `T` does not have.
    pub fn format(&self, value: &T) -> Result<String> {
        let mut out = String::new();
        value.write_with(&self.pattern, &mut out).map_err(|_| {
            Error::invalid_format(
                &format!("{:?}", value),
                &self.pattern,
                format!("pattern cannot format {}", T::DESCRIPTION),
            )
        })?;
        Ok(out)
    }

    /// Reads a value from `input`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] when `input` does not match the pattern.
    pub fn parse(&self, input: &str) -> Result<T> {
        T::parse_with(input, &self.pattern).map_err(|err| {
            trace!(input, pattern = %self.pattern, %err, "temporal parse failed");
            Error::invalid_format(input, &self.pattern, err)
        })
    }

    /// Writes `value` as a string.
    ///
    /// # Errors
    ///
    /// Formatting errors are reported through `S::Error::custom`.
    pub fn serialize<S>(&self, value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self.format(value).map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// Reads a value from a string token.
    ///
    /// # Errors
    ///
    /// Parse errors are reported through `D::Error::custom`.
    pub fn deserialize<'de, D>(&self, deserializer: D) -> std::result::Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        DeserializeSeed::deserialize(self, deserializer)
    }
}

impl<T: Temporal> Default for TemporalFormat<T> {
    fn default() -> Self {
        Self::new(T::DEFAULT_PATTERN)
    }
}

impl<T> Clone for TemporalFormat<T> {
    fn clone(&self) -> Self {
        TemporalFormat {
            pattern: self.pattern.clone(),
            marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for TemporalFormat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TemporalFormat").field(&self.pattern).finish()
    }
}

impl<'de, 'a, T: Temporal> DeserializeSeed<'de> for &'a TemporalFormat<T> {
    type Value = T;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(PatternVisitor { format: self })
    }
}

struct PatternVisitor<'a, T> {
    format: &'a TemporalFormat<T>,
}

impl<'de, 'a, T: Temporal> Visitor<'de> for PatternVisitor<'a, T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "{} formatted as `{}`",
            T::DESCRIPTION,
            self.format.pattern
        )
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<T, E> {
        self.format.parse(v).map_err(E::custom)
    }
}

macro_rules! default_format_module {
    ($(#[$meta:meta])* $module:ident, $ty:ty) => {
        $(#[$meta])*
        pub mod $module {
            use super::TemporalFormat;
            use serde::{Deserializer, Serializer};

            /// Writes the value with the default pattern.
            ///
            /// # Errors
            ///
            /// Formatting errors are reported through `S::Error::custom`.
            pub fn serialize<S>(value: &$ty, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                TemporalFormat::<$ty>::default().serialize(value, serializer)
            }

            /// Reads the value with the default pattern.
            ///
            /// # Errors
            ///
            /// Parse errors are reported through `D::Error::custom`.
            pub fn deserialize<'de, D>(deserializer: D) -> Result<$ty, D::Error>
            where
                D: Deserializer<'de>,
            {
                TemporalFormat::<$ty>::default().deserialize(deserializer)
            }

            /// The same pattern for `Option` fields, with `null` and `""` read as `None`.
            pub mod blank {
                use super::super::TemporalFormat;
                use crate::blank::{serialize_with, BlankSeed};
                use serde::de::DeserializeSeed;
                use serde::{Deserializer, Serializer};

                /// Writes `None` as `""` and `Some(v)` with the default pattern.
                ///
                /// # Errors
                ///
                /// Formatting errors are reported through `S::Error::custom`.
                pub fn serialize<S>(value: &Option<$ty>, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    let format = TemporalFormat::<$ty>::default();
                    serialize_with(value, serializer, |value, serializer| {
                        format.serialize(value, serializer)
                    })
                }

                /// Reads `null` and `""` as `None`, anything else with the default pattern.
                ///
                /// # Errors
                ///
                /// Parse errors are reported through `D::Error::custom`.
                pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<$ty>, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    BlankSeed(&TemporalFormat::<$ty>::default()).deserialize(deserializer)
                }
            }
        }
    };
}

default_format_module!(
    /// `#[serde(with)]` helpers for `NaiveDate` as `%Y-%m-%d`.
    date,
    chrono::NaiveDate
);
default_format_module!(
    /// `#[serde(with)]` helpers for `NaiveTime` as `%H:%M:%S%.3f`.
    time,
    chrono::NaiveTime
);
default_format_module!(
    /// `#[serde(with)]` helpers for `NaiveDateTime` as `%Y-%m-%dT%H:%M:%S%.3f`.
    datetime,
    chrono::NaiveDateTime
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_patterns() {
        assert_eq!(DateFormat::default().pattern(), "%Y-%m-%d");
        assert_eq!(TimeFormat::default().pattern(), "%H:%M:%S%.3f");

        let time = NaiveTime::from_hms_milli_opt(13, 5, 9, 250).unwrap();
        assert_eq!(TimeFormat::default().format(&time).unwrap(), "13:05:09.250");
        assert_eq!(TimeFormat::default().parse("13:05:09.250").unwrap(), time);
    }

    #[test]
    fn test_custom_pattern() {
        let format = DateFormat::with_pattern(String::from("%d/%m/%Y"));
        assert_eq!(format.parse("09/03/2024").unwrap(), date(2024, 3, 9));
        assert_eq!(format.format(&date(2024, 3, 9)).unwrap(), "09/03/2024");
    }

    #[test]
    fn test_parse_failure_is_invalid_format() {
        let err = DateFormat::default().parse("2024-13-01").unwrap_err();
        match err {
            Error::InvalidFormat { input, format, .. } => {
                assert_eq!(input, "2024-13-01");
                assert_eq!(format, "%Y-%m-%d");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(TimeFormat::default().parse("25:00:00.000").is_err());
    }

    #[test]
    fn test_pattern_without_matching_fields_fails_to_format() {
        let format = DateFormat::new("%H:%M");
        assert!(matches!(
            format.format(&date(2024, 1, 1)),
            Err(Error::InvalidFormat { .. })
        ));
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Event {
        #[serde(with = "crate::temporal::date")]
        on: NaiveDate,
        #[serde(with = "crate::temporal::time")]
        at: NaiveTime,
    }

    #[test]
    fn test_with_modules() {
        let event = Event {
            on: date(2024, 3, 9),
            at: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"on":"2024-03-09","at":"08:00:00.000"}"#);
        assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), event);
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Reminder {
        #[serde(with = "crate::temporal::time::blank")]
        at: Option<NaiveTime>,
        #[serde(with = "crate::temporal::datetime::blank", default)]
        until: Option<NaiveDateTime>,
    }

    #[test]
    fn test_blank_modules_keep_the_pattern() {
        let reminder = Reminder {
            at: Some(NaiveTime::from_hms_opt(8, 0, 0).unwrap()),
            until: None,
        };
        let json = serde_json::to_string(&reminder).unwrap();
        assert_eq!(json, r#"{"at":"08:00:00.000","until":""}"#);
        assert_eq!(serde_json::from_str::<Reminder>(&json).unwrap(), reminder);

        let reminder: Reminder = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert_eq!(reminder, Reminder { at: None, until: None });
        assert!(serde_json::from_str::<Reminder>(r#"{"at":"8 o'clock"}"#).is_err());
    }

    #[test]
    fn test_with_modules_reject_other_tokens() {
        assert!(serde_json::from_str::<Event>(r#"{"on":20240309,"at":"08:00:00.000"}"#).is_err());
        assert!(serde_json::from_str::<Event>(r#"{"on":"03/09/2024","at":"08:00:00.000"}"#).is_err());
    }
}
