//! Underlying integer representations of symbolic enums.
//!
//! An enum value is stored as one of eight primitive integers. The codec treats all of
//! them uniformly through a `u64` *carrier*:
//!
//! - **widen**: signed values are sign-extended to 64 bits, then reinterpreted as `u64`
//! - **narrow**: the carrier is truncated back to the declared width
//!
//! Narrowing a widened value always restores the original bit pattern, including
//! negative values and the exact `MIN`/`MAX` of each type.
//!
//! ## Examples
//!
//! ```rust
//! use serde_symbolic::repr::{EnumRepr, Integer, IntegerKind};
//!
//! assert_eq!((-1i8).widen(), u64::MAX);
//! assert_eq!(i8::narrow(u64::MAX), -1);
//!
//! let n = Integer::narrow(IntegerKind::I16, (-2i16).widen());
//! assert_eq!(n, Integer::I16(-2));
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::Hash;

/// The eight integer representations an enum may be declared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntegerKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
}

impl IntegerKind {
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            IntegerKind::I8 | IntegerKind::U8 => 8,
            IntegerKind::I16 | IntegerKind::U16 => 16,
            IntegerKind::I32 | IntegerKind::U32 => 32,
            IntegerKind::I64 | IntegerKind::U64 => 64,
        }
    }

    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            IntegerKind::I8 | IntegerKind::I16 | IntegerKind::I32 | IntegerKind::I64
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IntegerKind::I8 => "i8",
            IntegerKind::U8 => "u8",
            IntegerKind::I16 => "i16",
            IntegerKind::U16 => "u16",
            IntegerKind::I32 => "i32",
            IntegerKind::U32 => "u32",
            IntegerKind::I64 => "i64",
            IntegerKind::U64 => "u64",
        }
    }

    /// Parses a signed JSON integer into this representation.
    ///
    /// Returns `None` when the value does not fit the width.
    #[must_use]
    pub fn parse_i64(self, v: i64) -> Option<Integer> {
        Some(match self {
            IntegerKind::I8 => Integer::I8(i8::try_from(v).ok()?),
            IntegerKind::U8 => Integer::U8(u8::try_from(v).ok()?),
            IntegerKind::I16 => Integer::I16(i16::try_from(v).ok()?),
            IntegerKind::U16 => Integer::U16(u16::try_from(v).ok()?),
            IntegerKind::I32 => Integer::I32(i32::try_from(v).ok()?),
            IntegerKind::U32 => Integer::U32(u32::try_from(v).ok()?),
            IntegerKind::I64 => Integer::I64(v),
            IntegerKind::U64 => Integer::U64(u64::try_from(v).ok()?),
        })
    }

    /// Parses an unsigned JSON integer into this representation.
    #[must_use]
    pub fn parse_u64(self, v: u64) -> Option<Integer> {
        Some(match self {
            IntegerKind::I8 => Integer::I8(i8::try_from(v).ok()?),
            IntegerKind::U8 => Integer::U8(u8::try_from(v).ok()?),
            IntegerKind::I16 => Integer::I16(i16::try_from(v).ok()?),
            IntegerKind::U16 => Integer::U16(u16::try_from(v).ok()?),
            IntegerKind::I32 => Integer::I32(i32::try_from(v).ok()?),
            IntegerKind::U32 => Integer::U32(u32::try_from(v).ok()?),
            IntegerKind::I64 => Integer::I64(i64::try_from(v).ok()?),
            IntegerKind::U64 => Integer::U64(v),
        })
    }
}

impl fmt::Display for IntegerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An integer of an exact width and signedness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Integer {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
}

impl Integer {
    #[must_use]
    pub const fn kind(self) -> IntegerKind {
        match self {
            Integer::I8(_) => IntegerKind::I8,
            Integer::U8(_) => IntegerKind::U8,
            Integer::I16(_) => IntegerKind::I16,
            Integer::U16(_) => IntegerKind::U16,
            Integer::I32(_) => IntegerKind::I32,
            Integer::U32(_) => IntegerKind::U32,
            Integer::I64(_) => IntegerKind::I64,
            Integer::U64(_) => IntegerKind::U64,
        }
    }

    /// Widens to the `u64` carrier, sign-extending signed values.
    #[must_use]
    pub const fn widen(self) -> u64 {
        match self {
            Integer::I8(v) => v as i64 as u64,
            Integer::U8(v) => v as u64,
            Integer::I16(v) => v as i64 as u64,
            Integer::U16(v) => v as u64,
            Integer::I32(v) => v as i64 as u64,
            Integer::U32(v) => v as u64,
            Integer::I64(v) => v as u64,
            Integer::U64(v) => v,
        }
    }

    /// Truncates a carrier back to `kind`.
    #[must_use]
    pub const fn narrow(kind: IntegerKind, carrier: u64) -> Self {
        match kind {
            IntegerKind::I8 => Integer::I8(carrier as i8),
            IntegerKind::U8 => Integer::U8(carrier as u8),
            IntegerKind::I16 => Integer::I16(carrier as i16),
            IntegerKind::U16 => Integer::U16(carrier as u16),
            IntegerKind::I32 => Integer::I32(carrier as i32),
            IntegerKind::U32 => Integer::U32(carrier as u32),
            IntegerKind::I64 => Integer::I64(carrier as i64),
            IntegerKind::U64 => Integer::U64(carrier),
        }
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        match self {
            Integer::I8(v) => v < 0,
            Integer::I16(v) => v < 0,
            Integer::I32(v) => v < 0,
            Integer::I64(v) => v < 0,
            _ => false,
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Integer::I8(v) => fmt::Display::fmt(&v, f),
            Integer::U8(v) => fmt::Display::fmt(&v, f),
            Integer::I16(v) => fmt::Display::fmt(&v, f),
            Integer::U16(v) => fmt::Display::fmt(&v, f),
            Integer::I32(v) => fmt::Display::fmt(&v, f),
            Integer::U32(v) => fmt::Display::fmt(&v, f),
            Integer::I64(v) => fmt::Display::fmt(&v, f),
            Integer::U64(v) => fmt::Display::fmt(&v, f),
        }
    }
}

impl Serialize for Integer {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Integer::I8(v) => serializer.serialize_i8(v),
            Integer::U8(v) => serializer.serialize_u8(v),
            Integer::I16(v) => serializer.serialize_i16(v),
            Integer::U16(v) => serializer.serialize_u16(v),
            Integer::I32(v) => serializer.serialize_i32(v),
            Integer::U32(v) => serializer.serialize_u32(v),
            Integer::I64(v) => serializer.serialize_i64(v),
            Integer::U64(v) => serializer.serialize_u64(v),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer usable as the representation of a symbolic enum.
///
/// Implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64` and `u64` only.
pub trait EnumRepr:
    sealed::Sealed + Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const KIND: IntegerKind;

    fn widen(self) -> u64;

    fn narrow(carrier: u64) -> Self;

    fn into_integer(self) -> Integer;
}

macro_rules! impl_enum_repr {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl EnumRepr for $ty {
                const KIND: IntegerKind = IntegerKind::$kind;

                #[inline]
                fn widen(self) -> u64 {
                    Integer::$kind(self).widen()
                }

                #[inline]
                fn narrow(carrier: u64) -> Self {
                    carrier as $ty
                }

                #[inline]
                fn into_integer(self) -> Integer {
                    Integer::$kind(self)
                }
            }
        )*
    };
}

impl_enum_repr! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_widening_sign_extends() {
        assert_eq!((-1i8).widen(), u64::MAX);
        assert_eq!(i32::MIN.widen(), 0xFFFF_FFFF_8000_0000);
        assert_eq!(i64::MIN.widen(), 1 << 63);
        assert_eq!(u8::MAX.widen(), 0xFF);
    }

    #[test]
    fn test_narrow_restores_extremes() {
        assert_eq!(i8::narrow(i8::MIN.widen()), i8::MIN);
        assert_eq!(i16::narrow(i16::MAX.widen()), i16::MAX);
        assert_eq!(u32::narrow(u32::MAX.widen()), u32::MAX);
        assert_eq!(i64::narrow(i64::MIN.widen()), i64::MIN);
        assert_eq!(u64::narrow(u64::MAX.widen()), u64::MAX);
    }

    #[test]
    fn test_integer_narrow_matches_kind() {
        let n = Integer::narrow(IntegerKind::U16, 0x1_0005);
        assert_eq!(n, Integer::U16(5));
        assert_eq!(n.kind(), IntegerKind::U16);
        assert!(Integer::I32(-3).is_negative());
        assert!(!Integer::U64(u64::MAX).is_negative());
    }

    #[test]
    fn test_parse_respects_width() {
        assert_eq!(IntegerKind::I8.parse_i64(-128), Some(Integer::I8(-128)));
        assert_eq!(IntegerKind::I8.parse_i64(-129), None);
        assert_eq!(IntegerKind::U8.parse_i64(-1), None);
        assert_eq!(IntegerKind::U8.parse_u64(255), Some(Integer::U8(255)));
        assert_eq!(IntegerKind::I64.parse_u64(u64::MAX), None);
        assert_eq!(IntegerKind::U64.parse_u64(u64::MAX), Some(Integer::U64(u64::MAX)));
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(IntegerKind::I16.bits(), 16);
        assert!(IntegerKind::I64.is_signed());
        assert!(!IntegerKind::U32.is_signed());
        assert_eq!(Integer::I64(-7).to_string(), "-7");
        assert_eq!(IntegerKind::U8.to_string(), "u8");
    }
}
