//! Codec lookup by type.
//!
//! A [`CodecRegistry`] holds one [`EnumCodec`] per enum type, keyed by [`TypeId`].
//! Codecs are registered explicitly with [`CodecRegistry::register`], or built on first
//! use from [`SymbolicEnum::codec_options`].
//!
//! The serde helpers ([`Symbolic`](crate::Symbolic), `serde_symbolic::symbolic`) use the
//! process-wide registry returned by [`global`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_symbolic::{registry, symbolic_enum, CodecOptions};
//!
//! symbolic_enum! {
//!     pub struct Priority(u8) {
//!         VeryHigh = 1,
//!     }
//! }
//!
//! registry::global()
//!     .register::<Priority>(CodecOptions::upper_snake_case())
//!     .unwrap();
//!
//! let json = serde_json::to_string(&serde_symbolic::Symbolic(Priority::VeryHigh)).unwrap();
//! assert_eq!(json, r#""VERY_HIGH""#);
//! ```

use crate::codec::EnumCodec;
use crate::enumeration::SymbolicEnum;
use crate::error::{Error, Result};
use crate::options::CodecOptions;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::{Arc, OnceLock};
use tracing::debug;

type AnyCodec = Arc<dyn Any + Send + Sync>;

/// Thread-safe map from enum type to its codec.
#[derive(Default)]
pub struct CodecRegistry {
    codecs: DashMap<TypeId, AnyCodec>,
}

impl CodecRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a codec for `E` with `options`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns the construction error of [`EnumCodec::new`].
    pub fn register<E: SymbolicEnum>(&self, options: CodecOptions) -> Result<Arc<EnumCodec<E>>> {
        let codec = Arc::new(EnumCodec::<E>::new(options)?);
        let previous = self
            .codecs
            .insert(TypeId::of::<E>(), Arc::clone(&codec) as AnyCodec);
        debug!(
            type_name = std::any::type_name::<E>(),
            replaced = previous.is_some(),
            "registered enum codec"
        );
        Ok(codec)
    }

    /// The codec registered for `E`, if any.
    #[must_use]
    pub fn get<E: SymbolicEnum>(&self) -> Option<Arc<EnumCodec<E>>> {
        let codec = Arc::clone(self.codecs.get(&TypeId::of::<E>())?.value());
        codec.downcast::<EnumCodec<E>>().ok()
    }

    /// The codec for `E`, built from `E::codec_options()` when none is registered.
    ///
    /// # Errors
    ///
    /// Returns the construction error of [`EnumCodec::new`].
    pub fn codec<E: SymbolicEnum>(&self) -> Result<Arc<EnumCodec<E>>> {
        if let Some(codec) = self.get::<E>() {
            return Ok(codec);
        }
        // built outside the entry so user code never runs under the shard lock
        let built: AnyCodec = Arc::new(EnumCodec::<E>::new(E::codec_options())?);
        let codec = Arc::clone(
            self.codecs
                .entry(TypeId::of::<E>())
                .or_insert_with(|| {
                    debug!(
                        type_name = std::any::type_name::<E>(),
                        "built default enum codec"
                    );
                    built
                })
                .value(),
        );
        codec.downcast::<EnumCodec<E>>().map_err(|_| {
            Error::configuration(
                std::any::type_name::<E>(),
                "registry entry holds a codec of another type",
            )
        })
    }

    /// Removes the codec of `E`. Returns whether one was registered.
    pub fn remove<E: SymbolicEnum>(&self) -> bool {
        self.codecs.remove(&TypeId::of::<E>()).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

/// The process-wide registry.
pub fn global() -> &'static CodecRegistry {
    static GLOBAL: OnceLock<CodecRegistry> = OnceLock::new();
    GLOBAL.get_or_init(CodecRegistry::new)
}
