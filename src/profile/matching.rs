//! Category Matching
//!
//!     Every category the segmentation engine knows about, and every table an attribute
//!     codec encodes through, answers the same question: "which encoded value does this
//!     token stand for, if any?". [`CategoryMatcher`] is that contract.
//!
//!     Three strategies implement it:
//!         1. [`ValueMap`]: exact lookup on the trimmed, lowercased token.
//!         2. [`IndexedMap`]: the 1-based rank of the first option pattern found in the
//!            token, with a default for unspecified or unlisted tokens.
//!         3. [`FuzzyMap`]: ordered regex patterns, first match wins.
//!
//!     `find` never fails: a miss is `None`. `encode` is the strict variant used when
//!     turning a caller's value into a wire code. Tables with a default (indexed maps)
//!     fall back to it, the others report an unknown value.

pub mod fuzzy_map;
pub mod indexed_map;
pub mod value_map;

pub use fuzzy_map::FuzzyMap;
pub use indexed_map::IndexedMap;
pub use value_map::ValueMap;

use crate::profile::error::{DetailsError, Result};
use std::fmt;

/// Encoded value of a single attribute option as the remote form expects it.
pub type Code = i64;

/// Lookup contract shared by all category tables.
pub trait CategoryMatcher: fmt::Debug + Send + Sync {
    /// The encoded value for `token` if it belongs to this category.
    ///
    /// Pure and total. The caller trims the token; case is ignored.
    fn find(&self, token: &str) -> Option<Code>;

    /// Translate a caller-supplied value for `attribute` into its code.
    fn encode(&self, attribute: &str, value: &str) -> Result<Code> {
        self.find(value)
            .ok_or_else(|| DetailsError::unknown_value(attribute, value))
    }
}

impl<M: CategoryMatcher + ?Sized> CategoryMatcher for &M {
    fn find(&self, token: &str) -> Option<Code> {
        (**self).find(token)
    }

    fn encode(&self, attribute: &str, value: &str) -> Result<Code> {
        (**self).encode(attribute, value)
    }
}

/// Normalization applied to keys and lookups of exact-match tables.
pub(crate) fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}
