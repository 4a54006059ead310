use std::collections::HashSet;

use crate::service::ServiceRef;

/// Stable handle to a node in a [`ServiceGraph`](crate::graph::ServiceGraph)
/// arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A node of the dependency forest.
///
/// `item` and `parent` are `None` only for the synthetic root. Children are
/// unordered; only parent/descendant relative order carries meaning.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) item: Option<ServiceRef>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: HashSet<NodeId>,
}

impl Node {
    /// The synthetic root: no item, no parent.
    pub(crate) fn root() -> Self {
        Self {
            item: None,
            parent: None,
            children: HashSet::new(),
        }
    }

    pub(crate) fn child(parent: NodeId, item: ServiceRef) -> Self {
        Self {
            item: Some(item),
            parent: Some(parent),
            children: HashSet::new(),
        }
    }
}
