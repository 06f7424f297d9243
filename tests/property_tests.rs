//! Property-based tests for casing and numeric width fidelity
//!
//! Undeclared values go through the integer fallback, so every bit pattern of every
//! representation must survive a trip through JSON unchanged.

use proptest::prelude::*;
use serde_symbolic::naming::convert;
use serde_symbolic::{symbolic_enum, Symbolic, SymbolicEnum};

symbolic_enum! { struct WideI8(i8) { Zero = 0 } }
symbolic_enum! { struct WideI16(i16) { Zero = 0 } }
symbolic_enum! { struct WideI32(i32) { Zero = 0 } }
symbolic_enum! { struct WideI64(i64) { Zero = 0 } }
symbolic_enum! { struct WideU8(u8) { Zero = 0 } }
symbolic_enum! { struct WideU16(u16) { Zero = 0 } }
symbolic_enum! { struct WideU32(u32) { Zero = 0 } }
symbolic_enum! { struct WideU64(u64) { Zero = 0 } }

fn roundtrip<E: SymbolicEnum + PartialEq + std::fmt::Debug>(value: E) -> bool {
    match serde_json::to_string(&Symbolic(value)) {
        Ok(json) => match serde_json::from_str::<Symbolic<E>>(&json) {
            Ok(back) => back.into_inner() == value,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", json);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

#[test]
fn test_min_and_max_of_every_width() {
    assert!(roundtrip(WideI8(i8::MIN)) && roundtrip(WideI8(i8::MAX)));
    assert!(roundtrip(WideI16(i16::MIN)) && roundtrip(WideI16(i16::MAX)));
    assert!(roundtrip(WideI32(i32::MIN)) && roundtrip(WideI32(i32::MAX)));
    assert!(roundtrip(WideI64(i64::MIN)) && roundtrip(WideI64(i64::MAX)));
    assert!(roundtrip(WideU8(u8::MIN)) && roundtrip(WideU8(u8::MAX)));
    assert!(roundtrip(WideU16(u16::MIN)) && roundtrip(WideU16(u16::MAX)));
    assert!(roundtrip(WideU32(u32::MIN)) && roundtrip(WideU32(u32::MAX)));
    assert!(roundtrip(WideU64(u64::MIN)) && roundtrip(WideU64(u64::MAX)));
}

#[test]
fn test_extremes_are_written_as_numbers() {
    assert_eq!(serde_json::to_string(&Symbolic(WideI64(i64::MIN))).unwrap(), "-9223372036854775808");
    assert_eq!(serde_json::to_string(&Symbolic(WideU64(u64::MAX))).unwrap(), "18446744073709551615");
    assert_eq!(serde_json::to_string(&Symbolic(WideU8(0))).unwrap(), r#""Zero""#);
}

proptest! {
    #[test]
    fn prop_i8(n in any::<i8>()) {
        prop_assert!(roundtrip(WideI8(n)));
    }

    #[test]
    fn prop_i16(n in any::<i16>()) {
        prop_assert!(roundtrip(WideI16(n)));
    }

    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(WideI32(n)));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(WideI64(n)));
    }

    #[test]
    fn prop_u8(n in any::<u8>()) {
        prop_assert!(roundtrip(WideU8(n)));
    }

    #[test]
    fn prop_u16(n in any::<u16>()) {
        prop_assert!(roundtrip(WideU16(n)));
    }

    #[test]
    fn prop_u32(n in any::<u32>()) {
        prop_assert!(roundtrip(WideU32(n)));
    }

    #[test]
    fn prop_u64(n in any::<u64>()) {
        prop_assert!(roundtrip(WideU64(n)));
    }

    #[test]
    fn prop_snake_case_is_idempotent(name in "[A-Za-z0-9 _.-]{0,32}") {
        let once = convert(&name, true, '_');
        prop_assert_eq!(convert(&once, true, '_'), once);
    }

    #[test]
    fn prop_upper_snake_case_is_idempotent(name in "[A-Za-z0-9 _.-]{0,32}") {
        let once = convert(&name, false, '_');
        prop_assert_eq!(convert(&once, false, '_'), once);
    }

    #[test]
    fn prop_upper_kebab_case_is_idempotent(name in "[A-Za-z0-9 _.-]{0,32}") {
        let once = convert(&name, false, '-');
        prop_assert_eq!(convert(&once, false, '-'), once);
    }

    #[test]
    fn prop_kebab_case_is_idempotent(name in "[A-Za-z0-9 _.-]{0,32}") {
        let once = convert(&name, true, '-');
        prop_assert_eq!(convert(&once, true, '-'), once);
    }

    #[test]
    fn prop_output_has_no_spaces(name in "[A-Za-z ]{0,32}") {
        let converted = convert(&name, true, '_');
        prop_assert!(!converted.contains(' '));
        prop_assert!(!converted.starts_with('_'));
        prop_assert!(!converted.ends_with('_'));
    }
}
