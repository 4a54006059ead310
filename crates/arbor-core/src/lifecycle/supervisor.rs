use std::sync::Arc;

use crate::error::{Error, LifecyclePhase, Result};
use crate::graph::forest::ServiceGraph;
use crate::service::ServiceRef;

/// Owns a [`ServiceGraph`] and drives its services through start and stop in
/// dependency order.
pub struct Supervisor {
    graph: ServiceGraph,
    running: bool,
}

impl Supervisor {
    /// Create a supervisor over a built graph. Nothing is started yet.
    pub fn new(graph: ServiceGraph) -> Self {
        Self {
            graph,
            running: false,
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &ServiceGraph {
        &self.graph
    }

    /// Mutable access to the underlying graph, e.g. for rewiring between
    /// lifecycle phases.
    pub fn graph_mut(&mut self) -> &mut ServiceGraph {
        &mut self.graph
    }

    /// Whether a start pass has completed without a matching stop.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Give the graph back, discarding the supervisor.
    pub fn into_graph(self) -> ServiceGraph {
        self.graph
    }

    /// Start every service in sink order: a service starts strictly after
    /// the service it depends on. The first failure aborts the pass and
    /// propagates; already-started services are left running.
    pub async fn start(&mut self) -> Result<()> {
        if self.running {
            return Err(Error::Lifecycle {
                phase: LifecyclePhase::Start,
                service: None,
                message: "services already started".to_string(),
                source: None,
            });
        }

        log::info!("Starting {} services...", self.graph.service_count());
        for (_, service) in start_order(&self.graph) {
            log::info!("Starting service: {}", service.kind());
            if let Err(e) = service.start().await {
                return Err(Error::Lifecycle {
                    phase: LifecyclePhase::Start,
                    service: Some(service.kind().to_string()),
                    message: "service failed to start".to_string(),
                    source: Some(Box::new(e)),
                });
            }
        }
        self.running = true;
        log::info!("Service start complete.");
        Ok(())
    }

    /// Stop every service in emerge order: a service stops strictly after
    /// everything depending on it. The first failure is logged and then
    /// propagated.
    pub async fn stop(&mut self) -> Result<()> {
        log::info!("Stopping services...");
        for (_, service) in stop_order(&self.graph) {
            log::info!("Stopping service: {}", service.kind());
            if let Err(e) = service.stop().await {
                log::error!("Error stopping service {}: {}", service.kind(), e);
                return Err(Error::Lifecycle {
                    phase: LifecyclePhase::Stop,
                    service: Some(service.kind().to_string()),
                    message: "service failed to stop".to_string(),
                    source: Some(Box::new(e)),
                });
            }
        }
        self.running = false;
        log::info!("Service shutdown complete.");
        Ok(())
    }
}

/// The flattened startup order of `graph`: `(dependency, service)` pairs in
/// sink order, the dependency being `None` for root-level services.
pub fn start_order(graph: &ServiceGraph) -> Vec<(Option<ServiceRef>, ServiceRef)> {
    let mut order = Vec::with_capacity(graph.service_count());
    graph.sink(|parent, child| order.push((parent.cloned(), Arc::clone(child))));
    order
}

/// The flattened shutdown order of `graph`: the emerge-order mirror of
/// [`start_order`].
pub fn stop_order(graph: &ServiceGraph) -> Vec<(Option<ServiceRef>, ServiceRef)> {
    let mut order = Vec::with_capacity(graph.service_count());
    graph.emerge(|parent, child| order.push((parent.cloned(), Arc::clone(child))));
    order
}
