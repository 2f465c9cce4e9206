use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the routefinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name is absent from the graph.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route connects two known locations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any locations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a predecessor walk cannot reach the start location.
    #[error("predecessor chain is broken at {location}")]
    BrokenPredecessorChain { location: String },

    /// Raised when a location carries coordinates outside the valid ranges.
    #[error("invalid coordinates for {name}: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates {
        name: String,
        latitude: f64,
        longitude: f64,
    },

    /// Raised when a coordinate record cannot be parsed.
    #[error("invalid location record at {}:{line}: {message}", .path.display())]
    InvalidLocationRecord {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Raised when an algorithm name does not match any known strategy.
    #[error("unknown algorithm '{name}'; expected one of: bfs, dfs, iddfs, best-first, a-star")]
    UnknownAlgorithm { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
