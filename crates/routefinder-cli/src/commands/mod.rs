// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments, loads the
// network once and dispatches to these handlers.

pub mod algorithms;
pub mod interactive;
pub mod route;

use std::path::PathBuf;

use anyhow::{Context, Result};

use routefinder_lib::{load_network, Error as RouteError, Network, RouteAlgorithm, RouteRequest};

/// Input files backing the location network.
#[derive(Debug, Clone)]
pub struct NetworkPaths {
    pub adjacency: PathBuf,
    pub coordinates: PathBuf,
}

impl NetworkPaths {
    pub fn new(adjacency: impl Into<PathBuf>, coordinates: impl Into<PathBuf>) -> Self {
        Self {
            adjacency: adjacency.into(),
            coordinates: coordinates.into(),
        }
    }

    /// Load both files into a [`Network`].
    pub fn load(&self) -> Result<Network> {
        load_network(&self.adjacency, &self.coordinates).with_context(|| {
            format!(
                "failed to load network from {} and {}",
                self.adjacency.display(),
                self.coordinates.display()
            )
        })
    }
}

/// Depth bound used for iterative deepening when the user gives none.
///
/// A simple path never has more hops than the network has locations, so this
/// bound finds every reachable goal and still terminates for unreachable ones.
pub fn default_max_depth(network: &Network) -> usize {
    network.graph().len()
}

/// Translate library errors into messages meant for people at a terminal.
pub fn friendly_error(request: &RouteRequest, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownLocation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_location_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal, request))
        }
        other => anyhow::Error::new(other),
    }
}

pub(crate) fn format_unknown_location_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown location '{}'.", name);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        _ => {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn format_route_not_found_message(start: &str, goal: &str, request: &RouteRequest) -> String {
    let mut message = format!("No route found between {} and {}.", start, goal);
    match request.max_depth {
        Some(depth) if request.algorithm == RouteAlgorithm::Iddfs => {
            message.push_str(&format!(
                " Try raising --max-depth (currently {depth}) or a different algorithm."
            ));
        }
        _ => message.push_str(
            " The locations may lie in separate parts of the network; check the adjacency file.",
        ),
    }
    message
}
