/// Declares a symbolic enum: an integer newtype with named associated constants.
///
/// Each member is `Name = value`, optionally followed by `=> "rename"` to fix its
/// serialized string. A `: Flags` marker after the representation makes unnamed
/// combinations render as `"A, B"`.
///
/// The generated type derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` and `Debug`,
/// implements [`SymbolicEnum`](crate::SymbolicEnum), and supports `|`, `&` and `|=`.
///
/// # Examples
///
/// ```rust
/// use serde_symbolic::{symbolic_enum, SymbolicEnum};
///
/// symbolic_enum! {
///     /// File permissions.
///     pub struct Permissions(u16): Flags {
///         Read = 1,
///         Write = 2,
///         Execute = 4 => "exec",
///     }
/// }
///
/// let rw = Permissions::Read | Permissions::Write;
/// assert_eq!(rw.0, 3);
/// assert_eq!(Permissions::members().len(), 3);
/// assert!(Permissions::IS_FLAGS);
/// ```
#[macro_export]
macro_rules! symbolic_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) $(: $marker:ident)? {
            $(
                $(#[$member_meta:meta])*
                $member:ident = $value:expr $(=> $rename:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis struct $name(pub $repr);

        #[allow(non_upper_case_globals, dead_code)]
        impl $name {
            $(
                $(#[$member_meta])*
                pub const $member: $name = $name($value);
            )*
        }

        impl $crate::SymbolicEnum for $name {
            type Repr = $repr;

            const IS_FLAGS: bool = $crate::__symbolic_is_flags!($($marker)?);

            fn members() -> &'static [$crate::Member<Self>] {
                const MEMBERS: &[$crate::Member<$name>] = &[
                    $(
                        $crate::Member::new(::core::stringify!($member), $name($value))
                            $(.renamed($rename))?
                    ),*
                ];
                MEMBERS
            }

            #[inline]
            fn to_repr(self) -> $repr {
                self.0
            }

            #[inline]
            fn from_repr(repr: $repr) -> Self {
                $name(repr)
            }
        }

        impl ::core::ops::BitOr for $name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                $name(self.0 | rhs.0)
            }
        }

        impl ::core::ops::BitAnd for $name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                $name(self.0 & rhs.0)
            }
        }

        impl ::core::ops::BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __symbolic_is_flags {
    () => {
        false
    };
    (Flags) => {
        true
    };
}

#[cfg(test)]
mod tests {
    use crate::SymbolicEnum;

    symbolic_enum! {
        pub struct Signal(i8) {
            Off = 0,
            On = 1 => "on",
            Unknown = -1,
        }
    }

    symbolic_enum! {
        struct Mode(u64): Flags {
            A = 1 << 0,
            B = 1 << 63,
        }
    }

    #[test]
    fn test_members_in_declaration_order() {
        let names: Vec<_> = Signal::members().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Off", "On", "Unknown"]);
        assert_eq!(Signal::members()[1].rename(), Some("on"));
        assert_eq!(Signal::members()[2].value(), Signal(-1));
        assert!(!Signal::IS_FLAGS);
    }

    #[test]
    fn test_flag_operators() {
        let mut mode = Mode::A;
        mode |= Mode::B;
        assert!(Mode::IS_FLAGS);
        assert_eq!(mode, Mode::A | Mode::B);
        assert_eq!(mode & Mode::B, Mode::B);
        assert_eq!(mode.to_carrier(), (1 << 63) | 1);
    }

    #[test]
    fn test_repr_round_trip() {
        assert_eq!(Signal::from_repr(Signal::Unknown.to_repr()), Signal::Unknown);
        assert_eq!(Signal::from_carrier(u64::MAX), Signal::Unknown);
    }
}
