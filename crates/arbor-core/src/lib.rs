//! # Arbor Core
//!
//! A dependency-ordered service lifecycle graph: given a flat collection of
//! services, each optionally declaring a single dependency on another
//! service's logical kind, `arbor-core` builds a forest that encodes valid
//! startup and shutdown order, supports kind-based lookup, and allows the
//! forest to be re-shaped at runtime without rebuilding it.
//!
//! - [`kind`]: logical type tokens and proxy-aware identity resolution.
//! - [`service`]: the [`Service`] boundary trait services implement.
//! - [`graph`]: forest construction, traversal and runtime rewiring.
//! - [`lifecycle`]: the [`Supervisor`] driving start/stop in graph order.
//! - [`error`]: crate-level error type and `Result` alias.

pub mod error;
pub mod graph;
pub mod kind;
pub mod lifecycle;
pub mod service;

// Re-export key public types for easier use by consumers
pub use error::{Error, LifecyclePhase, Result};
pub use graph::{GraphBuilder, GraphError, NodeId, ServiceGraph};
pub use kind::{Kind, KindError, KindResolver, ProxyKindResolver};
pub use lifecycle::{start_order, stop_order, Supervisor};
pub use service::{Service, ServiceRef};
