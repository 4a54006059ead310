//! Error types for kind identity resolution.

use thiserror::Error; // Import thiserror

use crate::kind::Kind;

/// Error that can occur when resolving kind identity
#[derive(Debug, Clone, Error)]
pub enum KindError {
    /// A synthetic proxy name encodes a base kind that is not known to the
    /// resolver. This is a configuration error and is never reported as a
    /// silent mismatch.
    #[error("synthetic kind '{proxy}' names unknown base kind '{base}'")]
    UnresolvableProxy {
        /// The synthetic kind that was being resolved
        proxy: Kind,
        /// The base kind its name encodes
        base: Kind,
    },
}
