
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::graph::forest::ServiceGraph;
use crate::graph::node::NodeId;
use crate::kind::Kind;
use crate::service::{Service, ServiceRef};

/// Minimal service for structural tests: identity only, lifecycle is a no-op.
#[derive(Debug)]
pub(super) struct StubService {
    kind: Kind,
    depends_on: Option<Kind>,
    provides: Vec<Kind>,
}

#[async_trait]
impl Service for StubService {
    fn kind(&self) -> Kind {
        self.kind.clone()
    }

    fn depends_on(&self) -> Option<Kind> {
        self.depends_on.clone()
    }

    fn provides(&self) -> Vec<Kind> {
        self.provides.clone()
    }

    async fn start(&self) -> Result<()> {
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        Ok(())
    }
}

pub(super) fn stub(kind: &str) -> ServiceRef {
    stub_with(kind, None, &[])
}

pub(super) fn stub_dep(kind: &str, depends_on: &str) -> ServiceRef {
    stub_with(kind, Some(depends_on), &[])
}

pub(super) fn stub_with(kind: &str, depends_on: Option<&str>, provides: &[&str]) -> ServiceRef {
    Arc::new(StubService {
        kind: Kind::of(kind),
        depends_on: depends_on.map(Kind::of),
        provides: provides.iter().map(|name| Kind::of(*name)).collect(),
    })
}

/// The node holding the service of the given kind; panics if absent.
pub(super) fn node_of(graph: &ServiceGraph, kind: &str) -> NodeId {
    graph
        .get(&Kind::of(kind))
        .unwrap()
        .unwrap_or_else(|| panic!("no node for kind '{kind}'"))
}

/// Order-insensitive snapshot of the forest shape as sorted
/// `(parent kind, child kind)` name pairs.
pub(super) fn shape(graph: &ServiceGraph) -> Vec<(Option<String>, String)> {
    let mut pairs = Vec::new();
    graph.sink(|parent, child| {
        pairs.push((
            parent.map(|p| p.kind().to_string()),
            child.kind().to_string(),
        ));
    });
    pairs.sort();
    pairs
}
