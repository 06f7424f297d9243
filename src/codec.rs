//! Bidirectional mapping between symbolic enum values and strings.
//!
//! An [`EnumCodec`] is built once per enum type and configuration. Construction walks the
//! declared members and fills two tables:
//!
//! - **display names**: numeric value → canonical string (rename, else policy-converted
//!   identifier, else identifier). The first member declared for a value wins.
//! - **aliases**: string → value, holding identifiers, renames and policy-converted names,
//!   so that both the raw identifier and the canonical string decode.
//!
//! Values with no declared name (flag combinations, unknown values) go through the
//! default rendering: `"A, B"` for flag combinations, the number otherwise. Flag
//! combinations are memoized in a soft-capped concurrent cache.
//!
//! ## Examples
//!
//! ```rust
//! use serde_symbolic::{symbolic_enum, CodecOptions, EnumCodec, Encoded};
//!
//! symbolic_enum! {
//!     pub struct Access(u8): Flags {
//!         None = 0,
//!         ReadOnly = 1,
//!         WriteOnly = 2 => "write",
//!     }
//! }
//!
//! let codec = EnumCodec::<Access>::new(CodecOptions::snake_case()).unwrap();
//! assert_eq!(codec.encode(Access::ReadOnly).unwrap().as_str(), Some("read_only"));
//! assert_eq!(codec.encode(Access::WriteOnly).unwrap().as_str(), Some("write"));
//! assert_eq!(
//!     codec.encode(Access::ReadOnly | Access::WriteOnly).unwrap().as_str(),
//!     Some("read_only, write_only")
//! );
//! assert_eq!(codec.decode_str("ReadOnly").unwrap(), Access::ReadOnly);
//! ```

use crate::enumeration::SymbolicEnum;
use crate::error::{Error, Result};
use crate::naming::NamingPolicy;
use crate::options::CodecOptions;
use crate::repr::{EnumRepr, Integer, IntegerKind};
use dashmap::DashMap;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// The written form of an enum value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Encoded {
    /// A display string
    Text(Arc<str>),
    /// An undeclared value written as a number of the enum's exact width
    Number(Integer),
}

impl Encoded {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Encoded::Text(text) => Some(&**text),
            Encoded::Number(_) => None,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<Integer> {
        match self {
            Encoded::Text(_) => None,
            Encoded::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoded::Text(text) => f.write_str(text),
            Encoded::Number(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// A single input token, as seen by the decoder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token<'a> {
    Str(&'a str),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    /// Any other kind of token; the payload names the kind for error messages
    Unexpected(&'static str),
}

/// Encoder/decoder for one symbolic enum type.
///
/// Encoding and decoding take `&self` and may run concurrently from any number of
/// threads.
pub struct EnumCodec<E: SymbolicEnum> {
    allow_integer_fallback: bool,
    naming_policy: Option<Arc<dyn NamingPolicy>>,
    display_names: IndexMap<u64, Arc<str>>,
    alias_lookup: IndexMap<String, E>,
    // lowercased identifiers and policy names, for case-insensitive and composite input
    fragments: IndexMap<String, u64>,
    // distinct non-zero values ascending, identifier of the first member for each
    flags: Vec<(u64, &'static str)>,
    encode_cache: DashMap<u64, Arc<str>>,
    cache_capacity: usize,
    cache_full: AtomicBool,
}

impl<E: SymbolicEnum> EnumCodec<E> {
    /// Builds the codec from `E`'s declared members.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when a member has an empty name, or when an
    /// identifier or rename names two different values.
    pub fn new(options: CodecOptions) -> Result<Self> {
        let type_name = Self::type_name();
        let members = E::members();
        let policy = options.naming_policy.clone();

        let mut display_names: IndexMap<u64, Arc<str>> = IndexMap::with_capacity(members.len());
        let mut alias_lookup: IndexMap<String, E> = IndexMap::with_capacity(members.len() * 2);
        let mut fragments: IndexMap<String, u64> = IndexMap::with_capacity(members.len());
        let mut derived = Vec::new();

        for member in members {
            let name = member.name();
            let value = member.value();
            let carrier = value.to_carrier();
            if name.is_empty() {
                return Err(Error::configuration(type_name, "empty member name"));
            }

            insert_alias(&mut alias_lookup, name, value, type_name)?;
            let converted = policy.as_ref().map(|policy| policy.convert_name(name));
            let display: Arc<str> = match (member.rename(), &converted) {
                (Some(rename), _) => {
                    insert_alias(&mut alias_lookup, rename, value, type_name)?;
                    rename.into()
                }
                (None, Some(converted)) => converted.as_str().into(),
                (None, None) => name.into(),
            };
            if let Some(converted) = converted {
                derived.push((converted, value, member.rename().is_none()));
            }

            match display_names.entry(carrier) {
                Entry::Vacant(entry) => {
                    entry.insert(display);
                }
                Entry::Occupied(entry) => {
                    trace!(type_name, name, canonical = %entry.get(), "member collapsed into earlier alias");
                }
            }
            fragments.entry(name.to_lowercase()).or_insert(carrier);
        }

        // policy names never shadow identifiers or renames; combinations are written
        // with policy names even for renamed members, so those still parse as fragments
        for (converted, value, is_display) in derived {
            fragments
                .entry(converted.to_lowercase())
                .or_insert(value.to_carrier());
            if is_display {
                alias_lookup.entry(converted).or_insert(value);
            }
        }

        let mut flags: Vec<(u64, &'static str)> = Vec::new();
        if E::IS_FLAGS {
            for member in members {
                let carrier = member.value().to_carrier();
                if carrier != 0 && !flags.iter().any(|&(bits, _)| bits == carrier) {
                    flags.push((carrier, member.name()));
                }
            }
            flags.sort_by_key(|&(bits, _)| bits);
        }

        let kind = <E::Repr as EnumRepr>::KIND;
        debug!(
            type_name,
            kind = %kind,
            members = members.len(),
            names = display_names.len(),
            aliases = alias_lookup.len(),
            flags = E::IS_FLAGS,
            naming_policy = policy.is_some(),
            "built enum codec"
        );

        Ok(EnumCodec {
            allow_integer_fallback: options.allow_integer_fallback,
            naming_policy: policy,
            display_names,
            alias_lookup,
            fragments,
            flags,
            encode_cache: DashMap::new(),
            cache_capacity: options.cache_capacity,
            cache_full: AtomicBool::new(false),
        })
    }

    /// Encodes `value` as its display string, or as a number when allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrepresentableValue`] when the value has no string form and
    /// integer fallback is disabled.
    pub fn encode(&self, value: E) -> Result<Encoded> {
        let carrier = value.to_carrier();
        if let Some(name) = self.display_names.get(&carrier) {
            return Ok(Encoded::Text(Arc::clone(name)));
        }
        if let Some(cached) = self.encode_cache.get(&carrier) {
            return Ok(Encoded::Text(Arc::clone(cached.value())));
        }

        let rendered = self.render_default(carrier);
        if starts_like_identifier(&rendered) {
            let display: Arc<str> = match &self.naming_policy {
                Some(policy) => rendered
                    .split(", ")
                    .map(|fragment| policy.convert_name(fragment))
                    .collect::<Vec<_>>()
                    .join(", ")
                    .into(),
                None => rendered.into(),
            };
            self.remember(carrier, &display);
            return Ok(Encoded::Text(display));
        }

        if self.allow_integer_fallback {
            trace!(type_name = Self::type_name(), value = %rendered, "writing undeclared value as number");
            return Ok(Encoded::Number(value.to_repr().into_integer()));
        }
        Err(Error::unrepresentable(Self::type_name(), rendered))
    }

    /// Decodes one input token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedEnumLiteral`] for strings that match no alias or
    /// identifier, for numbers when integer fallback is disabled, and for numbers outside
    /// the enum's representation. Returns [`Error::MalformedInput`] for other token kinds.
    pub fn decode(&self, token: Token<'_>) -> Result<E> {
        let type_name = Self::type_name();
        match token {
            Token::Str(s) => self.decode_str(s),
            Token::Signed(v) if self.allow_integer_fallback => self
                .kind()
                .parse_i64(v)
                .map(|n| E::from_carrier(n.widen()))
                .ok_or_else(|| Error::unrecognized(type_name, v)),
            Token::Unsigned(v) if self.allow_integer_fallback => self
                .kind()
                .parse_u64(v)
                .map(|n| E::from_carrier(n.widen()))
                .ok_or_else(|| Error::unrecognized(type_name, v)),
            Token::Signed(v) => Err(Error::unrecognized(type_name, v)),
            Token::Unsigned(v) => Err(Error::unrecognized(type_name, v)),
            Token::Float(v) => Err(Error::unrecognized(type_name, v)),
            Token::Unexpected(found) => {
                Err(Error::malformed(type_name, "a string or an integer", found))
            }
        }
    }

    /// Decodes a string token.
    ///
    /// Exact aliases are tried first. Otherwise the input is read as comma-separated
    /// identifiers, compared without regard to case, and the matched values are OR-ed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedEnumLiteral`] when nothing matches.
    pub fn decode_str(&self, s: &str) -> Result<E> {
        if let Some(value) = self.alias_lookup.get(s) {
            return Ok(*value);
        }
        self.parse_identifiers(s)
            .map(E::from_carrier)
            .ok_or_else(|| Error::unrecognized(Self::type_name(), s))
    }

    /// The canonical display string of a declared value.
    #[must_use]
    pub fn display_name(&self, value: E) -> Option<&str> {
        self.display_names
            .get(&value.to_carrier())
            .map(|name| &**name)
    }

    /// Declared values and their display strings, in declaration order.
    pub fn display_names(&self) -> impl Iterator<Item = (E, &str)> + '_ {
        self.display_names
            .iter()
            .map(|(&carrier, name)| (E::from_carrier(carrier), &**name))
    }

    #[must_use]
    pub fn kind(&self) -> IntegerKind {
        <E::Repr as EnumRepr>::KIND
    }

    #[must_use]
    pub fn allows_integer_fallback(&self) -> bool {
        self.allow_integer_fallback
    }

    /// Number of memoized combination strings.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.encode_cache.len()
    }

    pub(crate) fn type_name() -> &'static str {
        std::any::type_name::<E>()
    }

    fn render_default(&self, carrier: u64) -> String {
        if E::IS_FLAGS {
            if let Some(names) = self.compose_flags(carrier) {
                return names;
            }
        }
        Integer::narrow(self.kind(), carrier).to_string()
    }

    fn compose_flags(&self, carrier: u64) -> Option<String> {
        if carrier == 0 {
            return None;
        }
        let mut remaining = carrier;
        let mut picked = Vec::new();
        for &(bits, name) in self.flags.iter().rev() {
            if remaining & bits == bits {
                remaining &= !bits;
                picked.push(name);
                if remaining == 0 {
                    break;
                }
            }
        }
        if remaining != 0 {
            return None;
        }
        picked.reverse();
        Some(picked.join(", "))
    }

    fn parse_identifiers(&self, s: &str) -> Option<u64> {
        let mut carrier = 0u64;
        for fragment in s.split(',') {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                return None;
            }
            carrier |= *self.fragments.get(fragment.to_lowercase().as_str())?;
        }
        Some(carrier)
    }

    fn remember(&self, carrier: u64, display: &Arc<str>) {
        // len() is approximate under contention; a few extra entries are fine
        if self.encode_cache.len() >= self.cache_capacity {
            if !self.cache_full.swap(true, Ordering::Relaxed) {
                debug!(
                    type_name = Self::type_name(),
                    capacity = self.cache_capacity,
                    "encode cache full, further combinations are not memoized"
                );
            }
            return;
        }
        self.encode_cache
            .entry(carrier)
            .or_insert_with(|| Arc::clone(display));
    }
}

impl<E: SymbolicEnum> fmt::Debug for EnumCodec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumCodec")
            .field("type", &Self::type_name())
            .field("kind", &self.kind())
            .field("allow_integer_fallback", &self.allow_integer_fallback)
            .field("display_names", &self.display_names)
            .field("cache_len", &self.cache_len())
            .finish_non_exhaustive()
    }
}

fn insert_alias<E: SymbolicEnum>(
    aliases: &mut IndexMap<String, E>,
    alias: &str,
    value: E,
    type_name: &'static str,
) -> Result<()> {
    match aliases.entry(alias.to_string()) {
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
        Entry::Occupied(entry) if entry.get().to_carrier() == value.to_carrier() => Ok(()),
        Entry::Occupied(entry) => Err(Error::configuration(
            type_name,
            format!(
                "`{}` names both {} and {}",
                alias,
                entry.get().to_repr(),
                value.to_repr()
            ),
        )),
    }
}

/// Default renderings of combinations are lists of identifiers; anything else,
/// such as `-1` or `8`, is a bare number.
#[inline]
fn starts_like_identifier(rendered: &str) -> bool {
    rendered
        .chars()
        .next()
        .is_some_and(|c| c != '-' && c.is_alphabetic())
}
