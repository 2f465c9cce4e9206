//! Routefinder library entry points.
//!
//! This crate exposes the location registry and adjacency graph, loaders for
//! the plain-text edge list and coordinate files, the haversine distance
//! model, and five interchangeable route search strategies. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod distance;
pub mod error;
pub mod graph;
pub mod loader;
pub mod location;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use distance::{haversine_km, route_distance, EARTH_RADIUS_KM};
pub use error::{Error, Result};
pub use graph::{Graph, GraphBuilder};
pub use loader::{load_graph, load_network, load_registry, parse_adjacency, parse_locations};
pub use location::{Location, LocationRegistry};
pub use network::Network;
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{
    find_route, find_route_a_star, find_route_best_first, find_route_bfs, find_route_dfs,
    find_route_iddfs, reconstruct_path,
};
pub use routing::{
    plan_route, select_planner, AStarPlanner, BestFirstPlanner, BfsPlanner, DfsPlanner,
    IddfsPlanner, RouteAlgorithm, RoutePlan, RoutePlanner, RouteRequest,
};
