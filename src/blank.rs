//! Optional values that use an empty string for "absent".
//!
//! Some producers write `""` where they mean "no value", including for fields whose value
//! is otherwise a number or an enum name. This module reads both `null` and `""` as
//! `None` and writes `None` as `""`.
//!
//! ## Usage
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Row {
//!     #[serde(with = "serde_symbolic::blank")]
//!     quantity: Option<u32>,
//! }
//!
//! let row: Row = serde_json::from_str(r#"{"quantity":""}"#).unwrap();
//! assert_eq!(row.quantity, None);
//!
//! let row: Row = serde_json::from_str(r#"{"quantity":12}"#).unwrap();
//! assert_eq!(row.quantity, Some(12));
//!
//! let json = serde_json::to_string(&Row { quantity: None }).unwrap();
//! assert_eq!(json, r#"{"quantity":""}"#);
//! ```
//!
//! Values read and written through another converter use [`BlankSeed`] and
//! [`serialize_with`]. The date/time helpers already carry a nested `blank` module, as in
//! `#[serde(with = "serde_symbolic::temporal::time::blank")]`.

use serde::de::value::{
    BorrowedStrDeserializer, BytesDeserializer, MapAccessDeserializer, SeqAccessDeserializer,
};
use serde::de::{self, DeserializeSeed, IntoDeserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Writes `None` as `""` and `Some(v)` as `v`.
///
/// # Errors
///
/// Propagates the serializer's errors.
pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    serialize_with(value, serializer, |value, serializer| value.serialize(serializer))
}

/// Writes `None` as `""` and `Some(v)` with `write`.
///
/// Pairs with [`BlankSeed`] when the inner value goes through a converter other than its
/// own `Serialize` impl, such as an [`EnumCodec`](crate::EnumCodec) or a
/// [`TemporalFormat`](crate::temporal::TemporalFormat).
///
/// # Errors
///
/// Propagates the errors of `write` and of the serializer.
pub fn serialize_with<T, S, F>(value: &Option<T>, serializer: S, write: F) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    F: FnOnce(&T, S) -> Result<S::Ok, S::Error>,
{
    match value {
        Some(value) => write(value, serializer),
        None => serializer.serialize_str(""),
    }
}

/// Reads `null` and `""` as `None`, anything else as `Some(T)`.
///
/// # Errors
///
/// Propagates the errors of `T::deserialize`.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    BlankSeed(PhantomData::<T>).deserialize(deserializer)
}

/// Reads `null` and `""` as `None`, anything else through the inner seed.
///
/// ```rust
/// use serde::de::DeserializeSeed;
/// use serde_symbolic::blank::BlankSeed;
/// use serde_symbolic::temporal::TimeFormat;
///
/// let format = TimeFormat::new("%H:%M");
/// let mut de = serde_json::Deserializer::from_str(r#""07:45""#);
/// let time = BlankSeed(&format).deserialize(&mut de).unwrap();
/// assert_eq!(time.map(|t| t.to_string()), Some("07:45:00".to_string()));
///
/// let mut de = serde_json::Deserializer::from_str(r#""""#);
/// assert_eq!(BlankSeed(&format).deserialize(&mut de).unwrap(), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BlankSeed<S>(pub S);

impl<'de, S: DeserializeSeed<'de>> DeserializeSeed<'de> for BlankSeed<S> {
    type Value = Option<S::Value>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BlankVisitor(self.0))
    }
}

struct BlankVisitor<S>(S);

impl<'de, S: DeserializeSeed<'de>> Visitor<'de> for BlankVisitor<S> {
    type Value = Option<S::Value>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a value, null, or an empty string")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        BlankSeed(self.0).deserialize(deserializer)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Ok(None);
        }
        self.0.deserialize(v.into_deserializer()).map(Some)
    }

    fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Ok(None);
        }
        self.0.deserialize(BorrowedStrDeserializer::new(v)).map(Some)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Ok(None);
        }
        self.0.deserialize(v.into_deserializer()).map(Some)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        self.0.deserialize(v.into_deserializer()).map(Some)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        self.0.deserialize(v.into_deserializer()).map(Some)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        self.0.deserialize(v.into_deserializer()).map(Some)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        self.0.deserialize(v.into_deserializer()).map(Some)
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
        self.0.deserialize(v.into_deserializer()).map(Some)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        self.0.deserialize(BytesDeserializer::new(v)).map(Some)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        self.0.deserialize(SeqAccessDeserializer::new(seq)).map(Some)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        self.0.deserialize(MapAccessDeserializer::new(map)).map(Some)
    }
}
