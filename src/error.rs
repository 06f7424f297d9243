//! Error types for symbolic enum encoding and decoding.
//!
//! This module provides a single [`Error`] enum shared by every adapter in the crate,
//! so that failures surface the same way whether they come from the enum codec, the
//! blank-nullable wrapper, or the date/time converters.
//!
//! ## Error Categories
//!
//! - **Unrepresentable values**: an enum value has no string form and integer fallback is off
//! - **Unrecognized literals**: a string or number does not decode to any known value
//! - **Malformed input**: the token is the wrong JSON kind entirely (object, bool, null)
//! - **Configuration errors**: an enum declaration is inconsistent (duplicate names)
//! - **Format errors**: a date or time string does not match its format string
//!
//! ## Examples
//!
//! ```rust
//! use serde_symbolic::{symbolic_enum, EnumCodec, CodecOptions, Error};
//!
//! symbolic_enum! {
//!     pub struct Color(u8) {
//!         Red = 1,
//!         Green = 2,
//!     }
//! }
//!
//! let codec = EnumCodec::<Color>::new(CodecOptions::strict()).unwrap();
//! let err = codec.encode(Color(7)).unwrap_err();
//! assert!(matches!(err, Error::UnrepresentableValue { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by the adapters in this crate.
///
/// Each variant carries the Rust type name of the value being converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value cannot be written as a string and integer fallback is disabled
    #[error("cannot represent value {value} of `{type_name}` as a string")]
    UnrepresentableValue {
        type_name: &'static str,
        value: String,
    },

    /// The input does not name any declared value or alias
    #[error("unrecognized literal {literal} for `{type_name}`")]
    UnrecognizedEnumLiteral {
        type_name: &'static str,
        literal: String,
    },

    /// The token is of the wrong kind
    #[error("malformed input for `{type_name}`: expected {expected}, found {found}")]
    MalformedInput {
        type_name: &'static str,
        expected: &'static str,
        found: String,
    },

    /// The enum declaration is inconsistent
    #[error("invalid declaration of `{type_name}`: {msg}")]
    Configuration { type_name: &'static str, msg: String },

    /// A date or time string does not match its format
    #[error("cannot parse `{input}` with format `{format}`: {msg}")]
    InvalidFormat {
        input: String,
        format: String,
        msg: String,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an encode-time error for a value with no string form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_symbolic::Error;
    ///
    /// let err = Error::unrepresentable("Flags", "-1");
    /// assert!(err.to_string().contains("-1"));
    /// ```
    pub fn unrepresentable(type_name: &'static str, value: impl fmt::Display) -> Self {
        Error::UnrepresentableValue {
            type_name,
            value: value.to_string(),
        }
    }

    /// Creates a decode-time error for a literal that matches nothing.
    ///
    /// The literal is rendered with `Debug` so that strings keep their quotes.
    pub fn unrecognized(type_name: &'static str, literal: impl fmt::Debug) -> Self {
        Error::UnrecognizedEnumLiteral {
            type_name,
            literal: format!("{:?}", literal),
        }
    }

    /// Creates an error for a token of the wrong kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_symbolic::Error;
    ///
    /// let err = Error::malformed("Color", "a string or integer", "boolean");
    /// assert!(err.to_string().contains("found boolean"));
    /// ```
    pub fn malformed(
        type_name: &'static str,
        expected: &'static str,
        found: impl fmt::Display,
    ) -> Self {
        Error::MalformedInput {
            type_name,
            expected,
            found: found.to_string(),
        }
    }

    /// Creates a construction-time error for an inconsistent enum declaration.
    pub fn configuration(type_name: &'static str, msg: impl Into<String>) -> Self {
        Error::Configuration {
            type_name,
            msg: msg.into(),
        }
    }

    /// Creates a parse error for the date/time converters.
    pub fn invalid_format(input: &str, format: &str, msg: impl fmt::Display) -> Self {
        Error::InvalidFormat {
            input: input.to_string(),
            format: format.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for errors raised while decoding input.
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::UnrecognizedEnumLiteral { .. }
                | Error::MalformedInput { .. }
                | Error::InvalidFormat { .. }
        )
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
