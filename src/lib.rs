//! # serde_symbolic
//!
//! Serde adapters that write enums as readable strings instead of numbers.
//!
//! ## What does it do?
//!
//! Many wire formats carry enumerations as strings (`"in_progress"`, `"Read, Write"`),
//! while the Rust side wants a typed value that may also hold numbers nobody declared
//! yet. This crate provides:
//!
//! - **Symbolic enums**: integer newtypes declared with [`symbolic_enum!`], written through
//!   an [`EnumCodec`] as their declared name, an override string, or a flags combination
//! - **Naming policies**: snake, kebab and camel casing of identifiers, with a word
//!   segmentation that keeps acronyms together (`XMLReader` → `xml_reader`)
//! - **Integer fallback**: undeclared values are written as numbers of the enum's exact
//!   width, or rejected, depending on [`CodecOptions`]
//! - **Blank-nullable fields**: [`blank`] reads `""` and `null` as `None`
//! - **Date/time formats**: [`temporal`] reads and writes `chrono` values with strftime
//!   patterns
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_symbolic = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Enum fields as strings
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_symbolic::symbolic_enum;
//!
//! symbolic_enum! {
//!     pub struct TaskState(u8) {
//!         NotStarted = 0,
//!         InProgress = 1,
//!         Done = 2 => "finished",
//!     }
//! }
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Task {
//!     id: u32,
//!     #[serde(with = "serde_symbolic::symbolic")]
//!     state: TaskState,
//! }
//!
//! let task = Task { id: 7, state: TaskState::InProgress };
//! let json = serde_json::to_string(&task).unwrap();
//! assert_eq!(json, r#"{"id":7,"state":"InProgress"}"#);
//!
//! let back: Task = serde_json::from_str(r#"{"id":7,"state":"finished"}"#).unwrap();
//! assert_eq!(back.state, TaskState::Done);
//! ```
//!
//! ### Flags and naming policies
//!
//! ```rust
//! use serde_symbolic::{symbolic_enum, CodecOptions, EnumCodec};
//!
//! symbolic_enum! {
//!     pub struct Permissions(u32): Flags {
//!         ReadData = 1,
//!         WriteData = 2,
//!         ExecuteFile = 4,
//!     }
//! }
//!
//! let codec = EnumCodec::<Permissions>::new(CodecOptions::kebab_case()).unwrap();
//! let encoded = codec.encode(Permissions::ReadData | Permissions::ExecuteFile).unwrap();
//! assert_eq!(encoded.as_str(), Some("read-data, execute-file"));
//! assert_eq!(
//!     codec.decode_str("read-data, execute-file").unwrap(),
//!     Permissions::ReadData | Permissions::ExecuteFile
//! );
//! ```
//!
//! ## Configuration
//!
//! The codec used by the serde helpers is looked up in the process-wide
//! [`CodecRegistry`]. It is built on first use from [`SymbolicEnum::codec_options`], or
//! can be replaced up front with [`register`].
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Codecs are immutable after construction except for a bounded memo cache
//! - Proper error propagation with `Result` types
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`enum_strings.rs`** - Enum fields as strings in JSON
//! - **`naming_policies.rs`** - Snake, kebab and camel casing
//! - **`flags.rs`** - Flag combinations and integer fallback
//! - **`converters.rs`** - Blank-nullable and date/time fields
//!
//! Run any example with: `cargo run --example <name>`

pub mod blank;
pub mod codec;
pub mod de;
pub mod enumeration;
pub mod error;
pub mod macros;
pub mod naming;
pub mod options;
pub mod registry;
pub mod repr;
pub mod ser;
pub mod temporal;

pub use codec::{Encoded, EnumCodec, Token};
pub use de::DecodeSeed;
pub use enumeration::{Member, Symbolic, SymbolicEnum};
pub use error::{Error, Result};
pub use naming::{CamelCase, NamingPolicy, SeparatorCase};
pub use options::CodecOptions;
pub use registry::CodecRegistry;
pub use repr::{EnumRepr, Integer, IntegerKind};

/// `#[serde(with = "serde_symbolic::symbolic")]` helpers for [`SymbolicEnum`] fields.
///
/// Both functions use the codec of the field's type from [`registry::global`].
pub mod symbolic {
    pub use crate::de::deserialize;
    pub use crate::ser::serialize;
}

use std::sync::Arc;

/// Replaces the process-wide codec of `E`.
///
/// # Examples
///
/// ```rust
/// use serde_symbolic::{symbolic_enum, CodecOptions};
///
/// symbolic_enum! {
///     pub struct Level(i16) {
///         VeryLow = -2,
///     }
/// }
///
/// serde_symbolic::register::<Level>(CodecOptions::upper_snake_case()).unwrap();
/// let encoded = serde_symbolic::encode(Level::VeryLow).unwrap();
/// assert_eq!(encoded.to_string(), "VERY_LOW");
/// ```
///
/// # Errors
///
/// Returns [`Error::Configuration`] when the declaration of `E` is inconsistent.
pub fn register<E: SymbolicEnum>(options: CodecOptions) -> Result<Arc<EnumCodec<E>>> {
    registry::global().register::<E>(options)
}

/// Encodes `value` with the process-wide codec of `E`.
///
/// # Errors
///
/// Returns [`Error::UnrepresentableValue`] when the value has no string form and the codec
/// does not allow integer fallback, or the construction error of the codec.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode<E: SymbolicEnum>(value: E) -> Result<Encoded> {
    registry::global().codec::<E>()?.encode(value)
}

/// Decodes a string with the process-wide codec of `E`.
///
/// # Examples
///
/// ```rust
/// use serde_symbolic::symbolic_enum;
///
/// symbolic_enum! {
///     pub struct Color(u8) {
///         Red = 1,
///         Green = 2,
///     }
/// }
///
/// assert_eq!(serde_symbolic::decode_str::<Color>("Green").unwrap(), Color::Green);
/// assert_eq!(serde_symbolic::decode_str::<Color>("red").unwrap(), Color::Red);
/// assert!(serde_symbolic::decode_str::<Color>("Blue").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnrecognizedEnumLiteral`] when `s` names no value of `E`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_str<E: SymbolicEnum>(s: &str) -> Result<E> {
    registry::global().codec::<E>()?.decode_str(s)
}
