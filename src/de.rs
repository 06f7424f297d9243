//! Reading symbolic enums through serde.
//!
//! Decoding consumes exactly one token with `deserialize_any`. Strings and integers are
//! handed to the codec; every other kind of token is malformed input.
//!
//! ## Usage
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_symbolic::{symbolic_enum, Symbolic};
//!
//! symbolic_enum! {
//!     pub struct Status(u8) {
//!         Active = 1,
//!         Disabled = 2 => "off",
//!     }
//! }
//!
//! #[derive(Deserialize)]
//! struct Account {
//!     #[serde(with = "serde_symbolic::symbolic")]
//!     status: Status,
//!     previous: Vec<Symbolic<Status>>,
//! }
//!
//! let account: Account =
//!     serde_json::from_str(r#"{"status":"off","previous":["Active","Disabled",2]}"#).unwrap();
//! assert_eq!(account.status, Status::Disabled);
//! assert_eq!(account.previous[0], Symbolic(Status::Active));
//! assert_eq!(account.previous[2], Symbolic(Status::Disabled));
//! ```

use crate::codec::{EnumCodec, Token};
use crate::enumeration::{Symbolic, SymbolicEnum};
use crate::registry;
use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

struct TokenVisitor<'a, E: SymbolicEnum> {
    codec: &'a EnumCodec<E>,
}

impl<'a, E: SymbolicEnum> TokenVisitor<'a, E> {
    fn decode<Er: de::Error>(&self, token: Token<'_>) -> Result<E, Er> {
        self.codec.decode(token).map_err(Er::custom)
    }
}

impl<'de, 'a, E: SymbolicEnum> Visitor<'de> for TokenVisitor<'a, E> {
    type Value = E;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "a string or an integer naming a value of `{}`",
            EnumCodec::<E>::type_name()
        )
    }

    fn visit_str<Er: de::Error>(self, v: &str) -> Result<E, Er> {
        self.decode(Token::Str(v))
    }

    fn visit_i64<Er: de::Error>(self, v: i64) -> Result<E, Er> {
        self.decode(Token::Signed(v))
    }

    fn visit_u64<Er: de::Error>(self, v: u64) -> Result<E, Er> {
        self.decode(Token::Unsigned(v))
    }

    fn visit_f64<Er: de::Error>(self, v: f64) -> Result<E, Er> {
        self.decode(Token::Float(v))
    }

    fn visit_bool<Er: de::Error>(self, _v: bool) -> Result<E, Er> {
        self.decode(Token::Unexpected("a boolean"))
    }

    fn visit_unit<Er: de::Error>(self) -> Result<E, Er> {
        self.decode(Token::Unexpected("null"))
    }

    fn visit_none<Er: de::Error>(self) -> Result<E, Er> {
        self.decode(Token::Unexpected("null"))
    }

    fn visit_bytes<Er: de::Error>(self, _v: &[u8]) -> Result<E, Er> {
        self.decode(Token::Unexpected("bytes"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<E, A::Error> {
        self.decode(Token::Unexpected("a sequence"))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<E, A::Error> {
        self.decode(Token::Unexpected("a map"))
    }
}

/// Reads one value of `E` with a specific codec.
///
/// Returned by [`EnumCodec::seed`]; useful inside hand-written `Deserialize` impls.
pub struct DecodeSeed<'a, E: SymbolicEnum> {
    codec: &'a EnumCodec<E>,
}

impl<'de, 'a, E: SymbolicEnum> DeserializeSeed<'de> for DecodeSeed<'a, E> {
    type Value = E;

    fn deserialize<D>(self, deserializer: D) -> Result<E, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TokenVisitor { codec: self.codec })
    }
}

impl<E: SymbolicEnum> EnumCodec<E> {
    /// Reads one value from `deserializer`.
    ///
    /// # Errors
    ///
    /// Decoding errors are reported through `D::Error::custom`.
    pub fn deserialize<'de, D>(&self, deserializer: D) -> Result<E, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.seed().deserialize(deserializer)
    }

    #[must_use]
    pub fn seed(&self) -> DecodeSeed<'_, E> {
        DecodeSeed { codec: self }
    }
}

impl<'de, E: SymbolicEnum> Deserialize<'de> for Symbolic<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(Symbolic)
    }
}

/// Reads a value of `E` with its registered codec.
///
/// Use as `#[serde(with = "serde_symbolic::symbolic")]` or
/// `#[serde(deserialize_with = "serde_symbolic::symbolic::deserialize")]`.
///
/// # Errors
///
/// Fails when the codec cannot be built or the input does not decode.
pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: SymbolicEnum,
    D: Deserializer<'de>,
{
    let codec = registry::global()
        .codec::<E>()
        .map_err(de::Error::custom)?;
    codec.deserialize(deserializer)
}
