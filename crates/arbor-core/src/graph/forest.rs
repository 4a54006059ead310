use std::sync::Arc;

use crate::graph::builder::GraphBuilder;
use crate::graph::error::GraphError;
use crate::graph::node::{Node, NodeId};
use crate::kind::resolver::KindResolver;
use crate::kind::Kind;
use crate::service::ServiceRef;

/// Dependency forest over a set of services, anchored at a synthetic root.
///
/// Produced by [`GraphBuilder`]; the shape encodes valid startup order
/// (parent before descendants) and shutdown order (descendants before
/// parent). All operations are synchronous in-memory edits; callers must
/// serialize concurrent use.
pub struct ServiceGraph {
    nodes: Vec<Node>,
    root: NodeId,
    resolver: Arc<dyn KindResolver>,
}

impl std::fmt::Debug for ServiceGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceGraph")
            .field("nodes", &self.nodes)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl ServiceGraph {
    /// Build a graph from an unordered service snapshot with default
    /// settings. See [`GraphBuilder`] for the configurable form.
    pub fn build<I>(services: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = ServiceRef>,
    {
        GraphBuilder::new().add_services(services).build()
    }

    pub(crate) fn empty(resolver: Arc<dyn KindResolver>) -> Self {
        Self {
            nodes: vec![Node::root()],
            root: NodeId(0),
            resolver,
        }
    }

    /// Allocate a node for `item` under `parent`. The node is not linked
    /// into the parent's child set yet.
    pub(crate) fn alloc_child(&mut self, parent: NodeId, item: ServiceRef) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::child(parent, item));
        id
    }

    pub(crate) fn link_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.insert(child);
    }

    /// The synthetic root node. Never carries a service and is never passed
    /// to traversal visitors.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The service held by `id`, if any. `None` for the root.
    pub fn service(&self, id: NodeId) -> Option<&ServiceRef> {
        self.nodes.get(id.0)?.item.as_ref()
    }

    /// The parent of `id`. `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    /// The children of `id`, in no particular order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(id.0)
            .map(|node| node.children.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of services in the forest (the root does not count).
    pub fn service_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether the forest holds no services at all.
    pub fn is_empty(&self) -> bool {
        self.service_count() == 0
    }

    /// Locate the first node whose service is an instance of `kind`.
    ///
    /// The search is depth-first from the root and polymorphism-aware: a
    /// node matches when its service's own kind, or any kind it `provides`,
    /// resolves equal to the requested kind. The root is never returned.
    pub fn get(&self, kind: &Kind) -> Result<Option<NodeId>, GraphError> {
        self.find_from(self.root, kind)
    }

    fn find_from(&self, id: NodeId, kind: &Kind) -> Result<Option<NodeId>, GraphError> {
        let node = &self.nodes[id.0];
        if let Some(item) = &node.item {
            if self.is_instance(item, kind)? {
                return Ok(Some(id));
            }
        }
        for &child in &node.children {
            if let Some(found) = self.find_from(child, kind)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    fn is_instance(&self, item: &ServiceRef, kind: &Kind) -> Result<bool, GraphError> {
        if self.resolver.same_kind(Some(kind), Some(&item.kind()))? {
            return Ok(true);
        }
        for capability in item.provides() {
            if self.resolver.same_kind(Some(kind), Some(&capability))? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Visit every service in "sink" order: a node strictly before any of
    /// its descendants. The visitor receives the parent service (`None` for
    /// direct children of the root) and the service itself.
    pub fn sink<F>(&self, mut visit: F)
    where
        F: FnMut(Option<&ServiceRef>, &ServiceRef),
    {
        self.sink_node(self.root, &mut visit);
    }

    /// [`sink`](Self::sink) restricted to the subtree rooted at `id`.
    pub fn sink_from<F>(&self, id: NodeId, mut visit: F)
    where
        F: FnMut(Option<&ServiceRef>, &ServiceRef),
    {
        self.sink_node(id, &mut visit);
    }

    fn sink_node<F>(&self, id: NodeId, visit: &mut F)
    where
        F: FnMut(Option<&ServiceRef>, &ServiceRef),
    {
        let node = &self.nodes[id.0];
        if let (Some(parent), Some(item)) = (node.parent, node.item.as_ref()) {
            visit(self.nodes[parent.0].item.as_ref(), item);
        }
        for &child in &node.children {
            self.sink_node(child, visit);
        }
    }

    /// Visit every service in "emerge" order: a node strictly after all of
    /// its descendants. The mirror of [`sink`](Self::sink).
    pub fn emerge<F>(&self, mut visit: F)
    where
        F: FnMut(Option<&ServiceRef>, &ServiceRef),
    {
        self.emerge_node(self.root, &mut visit);
    }

    /// [`emerge`](Self::emerge) restricted to the subtree rooted at `id`.
    pub fn emerge_from<F>(&self, id: NodeId, mut visit: F)
    where
        F: FnMut(Option<&ServiceRef>, &ServiceRef),
    {
        self.emerge_node(id, &mut visit);
    }

    fn emerge_node<F>(&self, id: NodeId, visit: &mut F)
    where
        F: FnMut(Option<&ServiceRef>, &ServiceRef),
    {
        let node = &self.nodes[id.0];
        for &child in &node.children {
            self.emerge_node(child, visit);
        }
        if let (Some(parent), Some(item)) = (node.parent, node.item.as_ref()) {
            visit(self.nodes[parent.0].item.as_ref(), item);
        }
    }

    /// Re-parent the subtree whose service matches `kind` under the node
    /// matching `new_dep`, or under the root when `new_dep` is `None`.
    ///
    /// A `kind` with no match in this graph is ignored: callers may attempt
    /// to rewire services that never joined this particular forest. A
    /// `new_dep` with no match is an error, and the forest is left exactly
    /// as it was. The declared dependency of the moved service is *not*
    /// re-validated against the new parent; rewire is an explicit override
    /// of the inferred structure.
    pub fn rewire(&mut self, kind: &Kind, new_dep: Option<&Kind>) -> Result<(), GraphError> {
        let Some(source) = self.get(kind)? else {
            log::debug!("rewire: no service matching kind '{kind}' in this graph, ignoring");
            return Ok(());
        };

        // Resolve the target before touching anything: a failed rewire must
        // leave the forest unchanged.
        let target = match new_dep {
            Some(dep) => self
                .get(dep)?
                .ok_or_else(|| GraphError::NoSuchDependencyTarget(dep.clone()))?,
            None => self.root,
        };

        // get() never yields the root, so the source always has a parent.
        let Some(old_parent) = self.nodes[source.0].parent else {
            return Ok(());
        };

        self.nodes[old_parent.0].children.remove(&source);
        self.nodes[source.0].parent = Some(target);
        self.nodes[target.0].children.insert(source);
        Ok(())
    }
}
