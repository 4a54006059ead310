//! Error types for graph construction and mutation.

use thiserror::Error; // Import thiserror

use crate::kind::error::KindError;
use crate::kind::Kind;

/// Error that can occur when building or rewiring a service graph
#[derive(Debug, Error)]
pub enum GraphError {
    /// One or more services could not be attached to the forest. This covers
    /// dependencies on kinds that were never supplied as well as dependency
    /// cycles: cyclic members can only match already-placed ancestors, so
    /// they stay in the placement pool forever.
    #[error("unresolvable dependency set; unplaced services: {}", .0.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(", "))]
    UnresolvedDependencies(Vec<Kind>),

    /// A rewire named a new dependency kind that is not present in the graph
    #[error("no service matching dependency target '{0}' in this graph")]
    NoSuchDependencyTarget(Kind),

    /// Kind identity resolution failed
    #[error("kind resolution error: {0}")]
    Kind(#[from] KindError),
}
