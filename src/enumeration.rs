//! Declared metadata of symbolic enums.
//!
//! A symbolic enum is an *open* enumeration: a newtype over an integer that has a set of
//! named values, but can also hold any other bit pattern of its representation (for
//! example a combination of flags, or a value sent by a newer peer). Rust's fieldless
//! enums cannot hold undeclared values, so [`SymbolicEnum`] is implemented on newtypes,
//! usually through [`symbolic_enum!`](crate::symbolic_enum).

use crate::options::CodecOptions;
use crate::repr::EnumRepr;
use std::fmt;

/// A declared value of a symbolic enum.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Member<E> {
    name: &'static str,
    value: E,
    rename: Option<&'static str>,
}

impl<E> Member<E> {
    #[must_use]
    pub const fn new(name: &'static str, value: E) -> Self {
        Member {
            name,
            value,
            rename: None,
        }
    }

    /// Sets an explicit serialized name. Naming policies do not apply to it.
    #[must_use]
    pub const fn renamed(mut self, rename: &'static str) -> Self {
        self.rename = Some(rename);
        self
    }

    /// The declared identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn rename(&self) -> Option<&'static str> {
        self.rename
    }
}

impl<E: Copy> Member<E> {
    #[must_use]
    pub fn value(&self) -> E {
        self.value
    }
}

impl<E: SymbolicEnum> fmt::Debug for Member<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("value", &self.value.to_repr())
            .field("rename", &self.rename)
            .finish()
    }
}

/// An open enumeration backed by a primitive integer.
///
/// `members` lists the declared values in declaration order. Several members may share
/// one numeric value; the first one declared is the canonical name of that value.
pub trait SymbolicEnum: Copy + Send + Sync + 'static {
    type Repr: EnumRepr;

    /// Whether the values are bit flags, rendered as `"A, B"` when combined.
    const IS_FLAGS: bool = false;

    fn members() -> &'static [Member<Self>];

    fn to_repr(self) -> Self::Repr;

    fn from_repr(repr: Self::Repr) -> Self;

    /// Options used when the codec for this type is built on first use.
    fn codec_options() -> CodecOptions {
        CodecOptions::default()
    }

    #[doc(hidden)]
    fn to_carrier(self) -> u64 {
        self.to_repr().widen()
    }

    #[doc(hidden)]
    fn from_carrier(carrier: u64) -> Self {
        Self::from_repr(<Self::Repr as EnumRepr>::narrow(carrier))
    }
}

/// Wrapper that serializes `E` through its registered [`EnumCodec`](crate::EnumCodec).
///
/// Useful where a field attribute cannot reach, such as `Vec<Symbolic<E>>` or map keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbolic<E>(pub E);

impl<E> Symbolic<E> {
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E> From<E> for Symbolic<E> {
    fn from(value: E) -> Self {
        Symbolic(value)
    }
}

impl<E> std::ops::Deref for Symbolic<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.0
    }
}
