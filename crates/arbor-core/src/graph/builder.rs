use std::sync::Arc;

use crate::graph::error::GraphError;
use crate::graph::forest::ServiceGraph;
use crate::graph::node::NodeId;
use crate::kind::resolver::{KindResolver, ProxyKindResolver};
use crate::kind::Kind;
use crate::service::{Service, ServiceRef};

/// Builder for constructing a [`ServiceGraph`] from an unordered service
/// snapshot.
///
/// Unless a custom resolver is supplied, a [`ProxyKindResolver`] is seeded
/// with every kind the snapshot mentions (service kinds, declared
/// dependencies and provided capabilities) plus any kinds registered via
/// [`register_kind`](Self::register_kind), so synthetic stand-ins resolve
/// against the kinds the snapshot actually talks about.
#[derive(Default)]
pub struct GraphBuilder {
    services: Vec<ServiceRef>,
    resolver: Option<Arc<dyn KindResolver>>,
    extra_kinds: Vec<Kind>,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a service instance
    pub fn add_service<S>(mut self, service: S) -> Self
    where
        S: Service + 'static,
    {
        self.services.push(Arc::new(service));
        self
    }

    /// Add an already-shared service handle
    pub fn add_service_ref(mut self, service: ServiceRef) -> Self {
        self.services.push(service);
        self
    }

    /// Add a collection of service handles
    pub fn add_services<I>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = ServiceRef>,
    {
        self.services.extend(services);
        self
    }

    /// Register an extra kind as known to the default resolver, e.g. a real
    /// kind that only appears behind proxies in this snapshot. Ignored when
    /// a custom resolver is supplied.
    pub fn register_kind(mut self, kind: Kind) -> Self {
        self.extra_kinds.push(kind);
        self
    }

    /// Use a custom identity resolver instead of the seeded default
    pub fn with_resolver(mut self, resolver: Arc<dyn KindResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Build the populated forest.
    ///
    /// Fails with [`GraphError::UnresolvedDependencies`] if any service is
    /// left unplaced after the pass: its declared dependency was never
    /// matched to a placed service, which covers both missing dependency
    /// targets and dependency cycles. On failure no graph is produced.
    pub fn build(self) -> Result<ServiceGraph, GraphError> {
        let GraphBuilder {
            services,
            resolver,
            extra_kinds,
        } = self;

        let resolver: Arc<dyn KindResolver> = match resolver {
            Some(resolver) => resolver,
            None => Arc::new(seed_resolver(&services, extra_kinds)),
        };

        let mut graph = ServiceGraph::empty(Arc::clone(&resolver));
        let root = graph.root();
        let mut pool = services;
        populate(&mut graph, root, &mut pool, resolver.as_ref())?;

        if !pool.is_empty() {
            let unresolved = pool.iter().map(|service| service.kind()).collect();
            return Err(GraphError::UnresolvedDependencies(unresolved));
        }
        Ok(graph)
    }
}

/// Recursive pool-based placement: scan the pool for services whose declared
/// dependency matches `parent`'s kind, attach each as a child and recurse
/// into it first, so deeper descendants claim remaining pool members before
/// the scan resumes at this level. A service with no declared dependency
/// matches the itemless root.
fn populate(
    graph: &mut ServiceGraph,
    parent: NodeId,
    pool: &mut Vec<ServiceRef>,
    resolver: &dyn KindResolver,
) -> Result<(), GraphError> {
    let parent_kind = graph.service(parent).map(|service| service.kind());

    let mut index = 0;
    while index < pool.len() {
        let declared = pool[index].depends_on();
        if resolver.same_kind(declared.as_ref(), parent_kind.as_ref())? {
            let service = pool.remove(index);
            let child = graph.alloc_child(parent, service);
            populate(graph, child, pool, resolver)?;
            graph.link_child(parent, child);
            // The recursion may have removed pool entries at arbitrary
            // positions, so restart the scan rather than trust the index.
            index = 0;
        } else {
            index += 1;
        }
    }
    Ok(())
}

fn seed_resolver(services: &[ServiceRef], extra_kinds: Vec<Kind>) -> ProxyKindResolver {
    let mut resolver = ProxyKindResolver::new();
    for service in services {
        resolver.register(service.kind());
        if let Some(dependency) = service.depends_on() {
            resolver.register(dependency);
        }
        for capability in service.provides() {
            resolver.register(capability);
        }
    }
    for kind in extra_kinds {
        resolver.register(kind);
    }
    resolver
}
