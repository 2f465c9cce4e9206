//! Route planning module.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search strategies
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Each algorithm is wrapped in a planner struct implementing
//! [`RoutePlanner`]. Planners borrow the graph (and, for the cost-aware
//! strategies, the location registry) at construction, so one loaded
//! [`Network`] can back any number of planners.
//!
//! # Example
//!
//! ```ignore
//! use routefinder_lib::{load_network, plan_route, RouteRequest};
//!
//! let network = load_network("adjacencies.txt".as_ref(), "coordinates.csv".as_ref())?;
//! let request = RouteRequest::a_star("Boston", "Denver");
//! let plan = plan_route(&network, &request)?;
//! println!("Route: {} hops, {:.1} km", plan.hop_count(), plan.distance_km);
//! ```

mod planner;

pub use planner::{
    select_planner, AStarPlanner, BestFirstPlanner, BfsPlanner, DfsPlanner, IddfsPlanner,
    RoutePlanner,
};

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::distance::route_distance;
use crate::error::{Error, Result};
use crate::network::Network;

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Breadth-first search (fewest hops).
    Bfs,
    /// Depth-first search (first route found).
    Dfs,
    /// Iterative-deepening depth-first search.
    Iddfs,
    /// Greedy best-first search on the cost of the last edge.
    BestFirst,
    /// A* search (shortest great-circle distance).
    #[default]
    AStar,
}

impl RouteAlgorithm {
    /// Every strategy, in menu order.
    pub const ALL: [RouteAlgorithm; 5] = [
        RouteAlgorithm::Bfs,
        RouteAlgorithm::Dfs,
        RouteAlgorithm::Iddfs,
        RouteAlgorithm::BestFirst,
        RouteAlgorithm::AStar,
    ];

    /// Whether the strategy consults coordinates while searching.
    pub fn is_cost_aware(self) -> bool {
        matches!(self, RouteAlgorithm::BestFirst | RouteAlgorithm::AStar)
    }

    /// Human-readable name used in menus and reports.
    pub fn description(self) -> &'static str {
        match self {
            RouteAlgorithm::Bfs => "Breadth-First Search",
            RouteAlgorithm::Dfs => "Depth-First Search",
            RouteAlgorithm::Iddfs => "Iterative Deepening Depth-First Search",
            RouteAlgorithm::BestFirst => "Best-First Search",
            RouteAlgorithm::AStar => "A* Search",
        }
    }
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dfs => "dfs",
            RouteAlgorithm::Iddfs => "iddfs",
            RouteAlgorithm::BestFirst => "best-first",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(RouteAlgorithm::Bfs),
            "dfs" | "depth-first" => Ok(RouteAlgorithm::Dfs),
            "iddfs" | "iterative-deepening" => Ok(RouteAlgorithm::Iddfs),
            "best-first" | "bestfs" | "greedy" => Ok(RouteAlgorithm::BestFirst),
            "a-star" | "astar" | "a*" => Ok(RouteAlgorithm::AStar),
            _ => Err(Error::UnknownAlgorithm {
                name: value.to_string(),
            }),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
    /// Upper bound on the iterative-deepening depth. `None` searches without
    /// limit, which never terminates for unreachable goals.
    pub max_depth: Option<usize>,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>, algorithm: RouteAlgorithm) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm,
            max_depth: None,
        }
    }

    /// Convenience constructor for breadth-first routes.
    pub fn bfs(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::new(start, goal, RouteAlgorithm::Bfs)
    }

    /// Convenience constructor for A* routes.
    pub fn a_star(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::new(start, goal, RouteAlgorithm::AStar)
    }

    /// Bound the iterative-deepening search depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    /// Sum of great-circle leg distances in kilometres.
    pub distance_km: f64,
    /// Wall-clock time spent inside the search itself.
    #[serde(skip)]
    pub elapsed: Duration,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm.
///
/// Unknown endpoints surface as [`Error::UnknownLocation`]; an exhausted
/// search surfaces as [`Error::RouteNotFound`].
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<RoutePlan> {
    let planner = select_planner(network, request);
    if planner.requires_coordinates() {
        let uncharted = network.locations_without_coordinates();
        if !uncharted.is_empty() {
            warn!(
                algorithm = %request.algorithm,
                count = uncharted.len(),
                "some locations have no coordinates; their edges are treated as infinitely long"
            );
        }
    }

    let started = Instant::now();
    let steps = planner
        .find_route(&request.start, &request.goal)?
        .ok_or_else(|| Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })?;
    let elapsed = started.elapsed();

    let distance_km = route_distance(network.registry(), &steps);
    info!(
        algorithm = %request.algorithm,
        hops = steps.len().saturating_sub(1),
        distance_km,
        elapsed_s = elapsed.as_secs_f64(),
        "planned route"
    );

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: request.start.clone(),
        goal: request.goal.clone(),
        steps,
        distance_km,
        elapsed,
    })
}
