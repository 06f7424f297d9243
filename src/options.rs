//! Configuration options for symbolic enum codecs.
//!
//! This module provides [`CodecOptions`], the builder that controls how an
//! [`EnumCodec`](crate::EnumCodec) renders and accepts values:
//!
//! - **Integer fallback**: write undeclared values as JSON numbers (and accept numbers on
//!   input), or reject them
//! - **Naming policy**: case-convert identifiers before writing them
//! - **Cache capacity**: soft cap on memoized flag-combination strings
//!
//! ## Examples
//!
//! ```rust
//! use serde_symbolic::CodecOptions;
//! use serde_symbolic::naming::SeparatorCase;
//!
//! // Default: integers allowed, identifiers written as declared
//! let options = CodecOptions::new();
//! assert!(options.allow_integer_fallback);
//!
//! // snake_case names, no integers
//! let options = CodecOptions::strict().with_naming_policy(SeparatorCase::SNAKE);
//! assert!(!options.allow_integer_fallback);
//! ```

use crate::naming::{NamingPolicy, SeparatorCase};
use std::fmt;
use std::sync::Arc;

/// Default soft cap on the encode cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Configuration options for an [`EnumCodec`](crate::EnumCodec).
///
/// # Examples
///
/// ```rust
/// use serde_symbolic::CodecOptions;
///
/// let options = CodecOptions::kebab_case()
///     .with_integer_fallback(false)
///     .with_cache_capacity(16);
/// assert_eq!(options.cache_capacity, 16);
/// ```
#[derive(Clone)]
pub struct CodecOptions {
    pub allow_integer_fallback: bool,
    pub naming_policy: Option<Arc<dyn NamingPolicy>>,
    pub cache_capacity: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            allow_integer_fallback: true,
            naming_policy: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl fmt::Debug for CodecOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecOptions")
            .field("allow_integer_fallback", &self.allow_integer_fallback)
            .field("naming_policy", &self.naming_policy.as_ref().map(|_| ".."))
            .field("cache_capacity", &self.cache_capacity)
            .finish()
    }
}

impl CodecOptions {
    /// Creates default options (integer fallback on, no naming policy).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject undeclared values and numeric input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_symbolic::CodecOptions;
    ///
    /// assert!(!CodecOptions::strict().allow_integer_fallback);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        CodecOptions {
            allow_integer_fallback: false,
            ..Default::default()
        }
    }

    /// Creates options writing `snake_case` names.
    #[must_use]
    pub fn snake_case() -> Self {
        Self::new().with_naming_policy(SeparatorCase::SNAKE)
    }

    /// Creates options writing `UPPER_SNAKE_CASE` names.
    #[must_use]
    pub fn upper_snake_case() -> Self {
        Self::new().with_naming_policy(SeparatorCase::UPPER_SNAKE)
    }

    /// Creates options writing `kebab-case` names.
    #[must_use]
    pub fn kebab_case() -> Self {
        Self::new().with_naming_policy(SeparatorCase::KEBAB)
    }

    /// Enables or disables writing and reading undeclared values as numbers.
    #[must_use]
    pub fn with_integer_fallback(mut self, allow: bool) -> Self {
        self.allow_integer_fallback = allow;
        self
    }

    /// Sets the naming policy applied to declared identifiers.
    ///
    /// Explicit renames are written as given. Any `Fn(&str) -> String` is accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_symbolic::CodecOptions;
    ///
    /// let options = CodecOptions::new().with_naming_policy(|name: &str| name.to_lowercase());
    /// assert!(options.naming_policy.is_some());
    /// ```
    #[must_use]
    pub fn with_naming_policy<P>(mut self, policy: P) -> Self
    where
        P: NamingPolicy + 'static,
    {
        self.naming_policy = Some(Arc::new(policy));
        self
    }

    /// Sets the soft cap of the encode cache.
    ///
    /// The cap is approximate under concurrent use. Zero disables caching.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}
