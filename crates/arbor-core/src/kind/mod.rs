//! # Arbor Core Kind System
//!
//! The `kind` module defines the logical type identity used throughout the
//! dependency graph. Services are not matched by Rust type but by an opaque,
//! comparable [`Kind`] token, so that graphs can be assembled from trait
//! objects and test doubles alike.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Kind Tokens**: The [`Kind`] type, a cheap-to-clone name token that
//!   identifies "what kind of service this is".
//! - **Synthetic Proxies**: Instrumentation and mocking tools generate
//!   stand-in services whose kind name embeds the real kind behind a `$$`
//!   marker (e.g. `Database$$stub3`). Such a stand-in must still be
//!   recognised as "the same kind" as the real service it replaces.
//! - **Identity Resolution**: The [`KindResolver`] trait in the `resolver`
//!   submodule decides whether two kind tokens denote the same service kind,
//!   unwrapping synthetic proxies as needed. [`ProxyKindResolver`] is the
//!   default implementation.
//! - **Error Handling**: [`KindError`](error::KindError) in the `error`
//!   submodule for unresolvable proxy names.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

pub mod error;
pub mod resolver;

pub use error::KindError;
pub use resolver::{KindResolver, ProxyKindResolver};

// Test module declaration
#[cfg(test)]
mod tests;

/// Marker separating a synthetic proxy name from the kind it was generated
/// from, following the enhancer-class naming scheme of interception and
/// mocking tooling.
pub const PROXY_MARKER: &str = "$$";

/// Opaque logical type token identifying a service kind.
///
/// `Kind` is a thin wrapper over a shared string and is cheap to clone.
/// Equality is plain name equality; proxy-aware comparison lives in
/// [`KindResolver::same_kind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Kind(Arc<str>);

impl Kind {
    /// Create a kind token from a name.
    pub fn of(name: impl Into<Arc<str>>) -> Self {
        Kind(name.into())
    }

    /// The raw name of this kind.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether this kind follows the synthetic proxy naming convention.
    pub fn is_synthetic(&self) -> bool {
        self.0.contains(PROXY_MARKER)
    }

    /// The kind a synthetic proxy was generated from, i.e. everything
    /// before the first [`PROXY_MARKER`]. `None` for ordinary kinds.
    pub fn proxy_base(&self) -> Option<Kind> {
        self.0
            .split_once(PROXY_MARKER)
            .map(|(base, _)| Kind::of(base))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Kind {
    fn from(name: &str) -> Self {
        Kind::of(name)
    }
}
