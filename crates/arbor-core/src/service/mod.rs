//! # Arbor Core Service Boundary
//!
//! Defines the [`Service`] trait, the narrow contract a unit must expose to
//! participate in a dependency graph: a logical [`Kind`], at most one
//! declared dependency, and an async start/stop lifecycle. The graph itself
//! only consumes the identity side of this contract; start/stop are driven
//! by the [`lifecycle`](crate::lifecycle) supervisor.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::kind::Kind;

/// Core lifecycle trait for all graph-managed services
#[async_trait]
pub trait Service: Send + Sync + Debug {
    /// The logical kind identifying this service.
    fn kind(&self) -> Kind;

    /// The kind of the service this one must be ordered after, if any.
    ///
    /// `None` means the service depends on nothing and attaches directly
    /// under the graph root.
    fn depends_on(&self) -> Option<Kind> {
        None
    }

    /// Additional capability kinds this service satisfies.
    ///
    /// Lookup and rewire match against these as well as [`kind`](Self::kind),
    /// so a service can be located by a capability token rather than its
    /// concrete kind.
    fn provides(&self) -> Vec<Kind> {
        Vec::new()
    }

    /// Start the service. Called after its dependency has started.
    async fn start(&self) -> Result<()>;

    /// Stop the service. Called after everything depending on it has stopped.
    async fn stop(&self) -> Result<()>;
}

/// Shared handle to a service instance.
pub type ServiceRef = Arc<dyn Service>;
