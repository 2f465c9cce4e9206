//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and one implementation per
//! search algorithm. Planners only hold shared references, so they are cheap
//! to build per request.

use crate::error::Result;
use crate::graph::Graph;
use crate::location::LocationRegistry;
use crate::network::Network;
use crate::path::{
    find_route_a_star, find_route_best_first, find_route_bfs, find_route_dfs, find_route_iddfs,
};

use super::{RouteAlgorithm, RouteRequest};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Search for a route from `start` to `goal`.
    ///
    /// Returns `Ok(Some(route))` on success and `Ok(None)` when the goal is
    /// unreachable. Unknown endpoints are reported as
    /// [`Error::UnknownLocation`](crate::Error::UnknownLocation).
    fn find_route(&self, start: &str, goal: &str) -> Result<Option<Vec<String>>>;

    /// Whether this planner reads coordinates while searching.
    fn requires_coordinates(&self) -> bool {
        false
    }
}

/// Breadth-first search planner.
///
/// Finds the route with the fewest hops but ignores distances.
#[derive(Debug, Clone, Copy)]
pub struct BfsPlanner<'a> {
    graph: &'a Graph,
}

impl<'a> BfsPlanner<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }
}

impl RoutePlanner for BfsPlanner<'_> {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_route(&self, start: &str, goal: &str) -> Result<Option<Vec<String>>> {
        find_route_bfs(self.graph, start, goal)
    }
}

/// Depth-first search planner.
#[derive(Debug, Clone, Copy)]
pub struct DfsPlanner<'a> {
    graph: &'a Graph,
}

impl<'a> DfsPlanner<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }
}

impl RoutePlanner for DfsPlanner<'_> {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dfs
    }

    fn find_route(&self, start: &str, goal: &str) -> Result<Option<Vec<String>>> {
        find_route_dfs(self.graph, start, goal)
    }
}

/// Iterative-deepening depth-first search planner.
///
/// Without a depth bound the planner loops forever when the goal is
/// unreachable; see [`IddfsPlanner::with_max_depth`].
#[derive(Debug, Clone, Copy)]
pub struct IddfsPlanner<'a> {
    graph: &'a Graph,
    max_depth: Option<usize>,
}

impl<'a> IddfsPlanner<'a> {
    /// Create an unbounded planner.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            max_depth: None,
        }
    }

    /// Give up with "not found" once every bound up to `max_depth` failed.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

impl RoutePlanner for IddfsPlanner<'_> {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Iddfs
    }

    fn find_route(&self, start: &str, goal: &str) -> Result<Option<Vec<String>>> {
        find_route_iddfs(self.graph, start, goal, self.max_depth)
    }
}

/// Greedy best-first planner ordered by the cost of the last edge.
#[derive(Debug, Clone, Copy)]
pub struct BestFirstPlanner<'a> {
    graph: &'a Graph,
    registry: &'a LocationRegistry,
}

impl<'a> BestFirstPlanner<'a> {
    pub fn new(graph: &'a Graph, registry: &'a LocationRegistry) -> Self {
        Self { graph, registry }
    }
}

impl RoutePlanner for BestFirstPlanner<'_> {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::BestFirst
    }

    fn find_route(&self, start: &str, goal: &str) -> Result<Option<Vec<String>>> {
        find_route_best_first(self.graph, self.registry, start, goal)
    }

    fn requires_coordinates(&self) -> bool {
        true
    }
}

/// A* planner using the great-circle distance as heuristic.
#[derive(Debug, Clone, Copy)]
pub struct AStarPlanner<'a> {
    graph: &'a Graph,
    registry: &'a LocationRegistry,
}

impl<'a> AStarPlanner<'a> {
    pub fn new(graph: &'a Graph, registry: &'a LocationRegistry) -> Self {
        Self { graph, registry }
    }
}

impl RoutePlanner for AStarPlanner<'_> {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_route(&self, start: &str, goal: &str) -> Result<Option<Vec<String>>> {
        find_route_a_star(self.graph, self.registry, start, goal)
    }

    fn requires_coordinates(&self) -> bool {
        true
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner<'a>(network: &'a Network, request: &RouteRequest) -> Box<dyn RoutePlanner + 'a> {
    let graph = network.graph();
    let registry = network.registry();
    match request.algorithm {
        RouteAlgorithm::Bfs => Box::new(BfsPlanner::new(graph)),
        RouteAlgorithm::Dfs => Box::new(DfsPlanner::new(graph)),
        RouteAlgorithm::Iddfs => {
            let planner = IddfsPlanner::new(graph);
            match request.max_depth {
                Some(max_depth) => Box::new(planner.with_max_depth(max_depth)),
                None => Box::new(planner),
            }
        }
        RouteAlgorithm::BestFirst => Box::new(BestFirstPlanner::new(graph, registry)),
        RouteAlgorithm::AStar => Box::new(AStarPlanner::new(graph, registry)),
    }
}
