//! # Arbor Core Lifecycle
//!
//! Drives the start/stop lifecycle of the services held by a
//! [`ServiceGraph`](crate::graph::ServiceGraph). The graph only encodes
//! ordering; this module is the consumer that turns "sink" order into
//! startup and "emerge" order into shutdown.
//!
//! The [`Supervisor`](supervisor::Supervisor) runs strictly sequentially on
//! one logical thread of control. Callers that want to start independent
//! subtrees concurrently can take the flattened orders from
//! [`start_order`](supervisor::start_order) /
//! [`stop_order`](supervisor::stop_order) and schedule them themselves.

pub mod supervisor;

pub use supervisor::{start_order, stop_order, Supervisor};
