//! # Arbor Core Errors
//!
//! Defines [`Error`], the crate-level enum encompassing the errors that can
//! occur while building or mutating a service graph or while driving the
//! service lifecycle, plus the [`Result`] alias used across the crate.

use std::result::Result as StdResult;

use thiserror::Error as ThisError; // Import ThisError

use crate::graph::error::GraphError;
use crate::kind::error::KindError;

/// Crate-level error type
#[derive(Debug, ThisError)]
pub enum Error {
    /// Specific, typed graph error (construction, lookup, rewire)
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// Specific, typed kind identity resolution error
    #[error("kind resolution error: {0}")]
    Kind(#[from] KindError),

    /// Error occurring while driving a service lifecycle phase.
    #[error("lifecycle error during {phase}{}: {message}", service.as_ref().map(|s| format!(" of '{s}'")).unwrap_or_default())]
    Lifecycle {
        phase: LifecyclePhase,
        service: Option<String>,
        message: String,
        #[source]
        source: Option<Box<Error>>, // Can wrap a service's own failure
    },

    /// Failure reported by a service implementation itself
    #[error("service error: {0}")]
    Service(String),
}

/// Represents a phase of the service lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum LifecyclePhase {
    #[error("start")]
    Start,
    #[error("stop")]
    Stop,
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;
