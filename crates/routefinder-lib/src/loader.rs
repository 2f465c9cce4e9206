//! Readers for the two plain-text inputs: a whitespace-separated edge list
//! and a `name,latitude,longitude` coordinate file.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphBuilder};
use crate::location::{Location, LocationRegistry};
use crate::network::Network;

/// Parse an edge list. Every line holding exactly two whitespace-separated
/// names adds an undirected edge; any other line is skipped.
pub fn parse_adjacency<R: Read>(reader: R) -> Result<GraphBuilder> {
    let mut builder = Graph::builder();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) => {
                builder.add_edge(a, b);
            }
            (None, _, _) => {}
            _ => debug!(line = index + 1, "skipping malformed adjacency line"),
        }
    }
    Ok(builder)
}

/// Load an edge list from disk into a [`Graph`].
pub fn load_graph(path: &Path) -> Result<Graph> {
    let file = File::open(path)?;
    Ok(parse_adjacency(file)?.build())
}

/// Parse comma-separated coordinate records. `source` is only used to label
/// errors.
///
/// Records that do not have exactly three fields are skipped. A first record
/// whose numeric fields do not parse is treated as a header row.
pub fn parse_locations<R: Read>(reader: R, source: &Path) -> Result<LocationRegistry> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut registry = LocationRegistry::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != 3 {
            debug!(line, fields = record.len(), "skipping malformed location record");
            continue;
        }

        let (latitude, longitude) = match parse_coordinates(&record) {
            Ok(coordinates) => coordinates,
            Err(_) if index == 0 => {
                debug!(line, "treating first location record as a header");
                continue;
            }
            Err(message) => {
                return Err(Error::InvalidLocationRecord {
                    path: source.to_path_buf(),
                    line,
                    message,
                });
            }
        };

        let location = Location::new(&record[0], latitude, longitude)?;
        if let Some(previous) = registry.insert(location) {
            warn!(name = %previous.name, line, "duplicate location record replaces earlier entry");
        }
    }

    Ok(registry)
}

/// Load a coordinate file from disk into a [`LocationRegistry`].
pub fn load_registry(path: &Path) -> Result<LocationRegistry> {
    let file = File::open(path)?;
    parse_locations(file, path)
}

/// Load both inputs and assemble the shared [`Network`].
pub fn load_network(adjacency: &Path, coordinates: &Path) -> Result<Network> {
    let builder = parse_adjacency(File::open(adjacency)?)?;
    let registry = load_registry(coordinates)?;
    let network = Network::new(builder, registry);

    info!(
        locations = network.graph().len(),
        edges = network.graph().edge_count(),
        with_coordinates = network.registry().len(),
        uncharted = network.locations_without_coordinates().len(),
        "loaded network"
    );

    Ok(network)
}

fn parse_coordinates(record: &StringRecord) -> std::result::Result<(f64, f64), String> {
    let parse = |field: &str, label: &str| {
        field
            .parse::<f64>()
            .map_err(|err| format!("{label} '{field}' is not a number: {err}"))
    };
    Ok((parse(&record[1], "latitude")?, parse(&record[2], "longitude")?))
}
