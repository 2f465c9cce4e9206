use std::collections::HashMap;
use std::sync::Arc;

use crate::location::rank_similar;

/// Undirected adjacency graph keyed by location name.
///
/// Neighbour lists keep the order in which edges were added, duplicates
/// included; search strategies iterate them in that order, so it decides
/// tie-breaking between otherwise equal routes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<String, Vec<String>>>,
}

impl Graph {
    /// Start building a graph edge by edge.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Wrap an adjacency mapping that is already symmetric.
    pub fn from_adjacency(adjacency: HashMap<String, Vec<String>>) -> Self {
        Self {
            adjacency: Arc::new(adjacency),
        }
    }

    /// Return the neighbours for a given location. Unknown and isolated
    /// locations both yield an empty slice.
    pub fn neighbours(&self, location: &str) -> &[String] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Return the graph's own copy of `location`, if the location is known.
    pub fn resolve(&self, location: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(location)
            .map(|(key, _)| key.as_str())
    }

    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Number of locations, isolated ones included.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges (each stored once per direction).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Iterate over all location names in arbitrary order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Return up to `limit` known names that closely resemble `name`.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        rank_similar(name, self.locations(), limit)
    }
}

/// Incremental constructor for [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: HashMap<String, Vec<String>>,
}

impl GraphBuilder {
    /// Add an undirected edge, appending each endpoint to the other's list.
    pub fn add_edge(&mut self, a: &str, b: &str) -> &mut Self {
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .push(b.to_string());
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .push(a.to_string());
        self
    }

    /// Register a location without adding any edges.
    pub fn add_location(&mut self, location: &str) -> &mut Self {
        self.adjacency.entry(location.to_string()).or_default();
        self
    }

    pub fn build(self) -> Graph {
        Graph::from_adjacency(self.adjacency)
    }
}
