use crate::graph::{Graph, GraphBuilder};
use crate::location::LocationRegistry;

/// Adjacency graph and location registry assembled once and shared, read
/// only, by every planner built from it.
#[derive(Debug, Clone, Default)]
pub struct Network {
    graph: Graph,
    registry: LocationRegistry,
}

impl Network {
    /// Bundle a graph with its registry. Every registered location that has
    /// no edges is added to the graph as an isolated node.
    pub fn new(graph: GraphBuilder, registry: LocationRegistry) -> Self {
        let mut graph = graph;
        for name in registry.names() {
            graph.add_location(name);
        }

        Self {
            graph: graph.build(),
            registry,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    /// Locations without a single edge, sorted by name.
    pub fn isolated_locations(&self) -> Vec<&str> {
        let mut isolated: Vec<&str> = self
            .graph
            .locations()
            .filter(|name| self.graph.neighbours(name).is_empty())
            .collect();
        isolated.sort_unstable();
        isolated
    }

    /// Graph locations without registered coordinates.
    pub fn locations_without_coordinates(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .graph
            .locations()
            .filter(|name| !self.registry.contains(name))
            .collect();
        missing.sort_unstable();
        missing
    }
}
