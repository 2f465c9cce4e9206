//! Common test utilities and fixture helpers.
//!
//! Provides the checked-in city fixture, small hand-built networks, and
//! brute-force reference computations used to validate the search strategies.

use std::collections::HashSet;
use std::path::PathBuf;

use proptest::prelude::*;
use routefinder_lib::{haversine_km, load_network, Graph, Location, LocationRegistry, Network};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load the western-US fixture network.
#[allow(dead_code)]
pub fn fixture_network() -> Network {
    let dir = fixtures_dir();
    load_network(&dir.join("adjacencies.txt"), &dir.join("coordinates.csv"))
        .expect("fixture network loads")
}

/// Build a network from an edge list and `(name, latitude, longitude)` triples.
#[allow(dead_code)]
pub fn network(edges: &[(&str, &str)], coordinates: &[(&str, f64, f64)]) -> Network {
    let mut builder = Graph::builder();
    for (a, b) in edges {
        builder.add_edge(a, b);
    }
    let registry: LocationRegistry = coordinates
        .iter()
        .map(|(name, lat, lon)| Location::new(*name, *lat, *lon).expect("valid coordinates"))
        .collect();
    Network::new(builder, registry)
}

/// Sum of great-circle distances along `route`.
#[allow(dead_code)]
pub fn route_cost(network: &Network, route: &[String]) -> f64 {
    route
        .windows(2)
        .map(|pair| {
            let a = network.registry().get(&pair[0]).expect("coordinates");
            let b = network.registry().get(&pair[1]).expect("coordinates");
            haversine_km(a, b)
        })
        .sum()
}

/// Assert that consecutive locations in `route` are adjacent in the graph.
#[allow(dead_code)]
pub fn assert_valid_route(graph: &Graph, route: &[String], start: &str, goal: &str) {
    assert_eq!(route.first().map(String::as_str), Some(start));
    assert_eq!(route.last().map(String::as_str), Some(goal));
    for pair in route.windows(2) {
        assert!(
            graph.neighbours(&pair[0]).contains(&pair[1]),
            "{} is not adjacent to {}",
            pair[0],
            pair[1]
        );
    }
}

/// Every simple path from `start` to `goal`.
#[allow(dead_code)]
pub fn all_simple_paths(graph: &Graph, start: &str, goal: &str) -> Vec<Vec<String>> {
    fn walk(
        graph: &Graph,
        current: &str,
        goal: &str,
        seen: &mut HashSet<String>,
        path: &mut Vec<String>,
        out: &mut Vec<Vec<String>>,
    ) {
        if current == goal {
            out.push(path.clone());
            return;
        }
        for next in graph.neighbours(current) {
            if seen.insert(next.clone()) {
                path.push(next.clone());
                walk(graph, next, goal, seen, path, out);
                path.pop();
                seen.remove(next);
            }
        }
    }

    let mut out = Vec::new();
    let mut seen = HashSet::from([start.to_string()]);
    let mut path = vec![start.to_string()];
    walk(graph, start, goal, &mut seen, &mut path, &mut out);
    out
}

/// Networks of two to eight locations `N0`, `N1`, ... scattered over a few
/// degrees, with each pair linked according to a random edge mask.
#[allow(dead_code)]
pub fn small_network() -> impl Strategy<Value = Network> {
    (2usize..=8)
        .prop_flat_map(|size| {
            (
                prop::collection::vec((0.0f64..5.0, 0.0f64..5.0), size),
                prop::collection::vec(prop::bool::weighted(0.4), size * (size - 1) / 2),
            )
        })
        .prop_map(|(coordinates, mask)| {
            let names: Vec<String> = (0..coordinates.len()).map(|i| format!("N{i}")).collect();
            let pairs = names
                .iter()
                .enumerate()
                .flat_map(|(i, a)| names[i + 1..].iter().map(move |b| (a, b)));

            let mut builder = Graph::builder();
            for ((a, b), linked) in pairs.zip(mask) {
                if linked {
                    builder.add_edge(a, b);
                }
            }
            let registry: LocationRegistry = names
                .iter()
                .zip(coordinates)
                .map(|(name, (lat, lon))| {
                    Location::new(name.as_str(), lat, lon).expect("valid coordinates")
                })
                .collect();
            Network::new(builder, registry)
        })
}
