//! # Arbor Core Dependency Graph
//!
//! The `graph` module is the heart of the crate: an arena-backed forest that
//! encodes the valid startup and shutdown order of a flat collection of
//! services, each optionally declaring a single dependency on another
//! service's kind.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Construction**: [`GraphBuilder`](builder::GraphBuilder) consumes the
//!   unordered service snapshot and produces a populated [`ServiceGraph`],
//!   failing if any service cannot be placed (missing dependency targets and
//!   dependency cycles both surface this way).
//! - **Node Storage**: nodes live in an arena and are addressed by stable
//!   [`NodeId`](node::NodeId) handles; `parent` is a non-owning index and
//!   `children` an unordered set, so re-parenting is O(1).
//! - **Traversal**: [`ServiceGraph::sink`] visits a node before its
//!   descendants (startup order); [`ServiceGraph::emerge`] visits it after
//!   them (shutdown order). Sibling order is unspecified.
//! - **Mutation**: [`ServiceGraph::rewire`] re-parents a subtree at runtime
//!   to a new dependency target located by kind, or to the root.
//! - **Error Handling**: [`GraphError`](error::GraphError) in the `error`
//!   submodule.
//!
//! The graph is a single mutable structure with no internal locking;
//! concurrent use from multiple threads must be serialized by the caller.

pub mod builder;
pub mod error;
pub mod forest;
pub mod node;

pub use builder::GraphBuilder;
pub use error::GraphError;
pub use forest::ServiceGraph;
pub use node::NodeId;

// Test module declaration
#[cfg(test)]
mod tests;
