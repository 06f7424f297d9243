//! Writing symbolic enums through serde.
//!
//! A codec writes exactly one value per call: a string through `serialize_str`, or, for
//! undeclared values with integer fallback, a number through the `serialize_*` method
//! of the enum's exact width.
//!
//! ## Usage
//!
//! Field attribute, using the process-wide codec of the type:
//!
//! ```rust
//! use serde::Serialize;
//! use serde_symbolic::symbolic_enum;
//!
//! symbolic_enum! {
//!     pub struct Status(u8) {
//!         Active = 1,
//!         Disabled = 2 => "off",
//!     }
//! }
//!
//! #[derive(Serialize)]
//! struct Account {
//!     #[serde(with = "serde_symbolic::symbolic")]
//!     status: Status,
//! }
//!
//! let json = serde_json::to_string(&Account { status: Status::Disabled }).unwrap();
//! assert_eq!(json, r#"{"status":"off"}"#);
//! ```
//!
//! Explicit codec:
//!
//! ```rust
//! use serde_symbolic::{symbolic_enum, CodecOptions, EnumCodec};
//!
//! symbolic_enum! {
//!     pub struct Status(u8) {
//!         NotStarted = 0,
//!     }
//! }
//!
//! let codec = EnumCodec::<Status>::new(CodecOptions::kebab_case()).unwrap();
//! let mut out = Vec::new();
//! codec
//!     .serialize(&Status::NotStarted, &mut serde_json::Serializer::new(&mut out))
//!     .unwrap();
//! assert_eq!(out, br#""not-started""#);
//! ```

use crate::codec::{EnumCodec, Encoded};
use crate::enumeration::{Symbolic, SymbolicEnum};
use crate::registry;
use serde::{ser, Serialize, Serializer};

impl Serialize for Encoded {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Encoded::Text(text) => serializer.serialize_str(text),
            Encoded::Number(n) => n.serialize(serializer),
        }
    }
}

impl<E: SymbolicEnum> EnumCodec<E> {
    /// Encodes `value` and writes it to `serializer`.
    ///
    /// # Errors
    ///
    /// Encoding errors are reported through `S::Error::custom`.
    pub fn serialize<S>(&self, value: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.encode(*value)
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<E: SymbolicEnum> Serialize for Symbolic<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(&self.0, serializer)
    }
}

/// Writes `value` with the registered codec of `E`.
///
/// Use as `#[serde(with = "serde_symbolic::symbolic")]` or
/// `#[serde(serialize_with = "serde_symbolic::symbolic::serialize")]`.
///
/// # Errors
///
/// Fails when the codec cannot be built or the value cannot be encoded.
pub fn serialize<E, S>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: SymbolicEnum,
    S: Serializer,
{
    let codec = registry::global()
        .codec::<E>()
        .map_err(ser::Error::custom)?;
    codec.serialize(value, serializer)
}
