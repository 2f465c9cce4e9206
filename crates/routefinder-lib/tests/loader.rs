mod common;

use std::fs;
use std::io::Cursor;
use std::path::Path;

use routefinder_lib::{load_graph, load_network, load_registry, parse_adjacency, parse_locations, Error};
use tempfile::tempdir;

use common::fixtures_dir;

#[test]
fn fixture_network_counts() {
    let dir = fixtures_dir();
    let network =
        load_network(&dir.join("adjacencies.txt"), &dir.join("coordinates.csv")).unwrap();

    assert_eq!(network.graph().len(), 14);
    assert_eq!(network.graph().edge_count(), 17);
    assert_eq!(network.registry().len(), 14);
    assert_eq!(network.isolated_locations(), vec!["Honolulu"]);
    assert!(network.locations_without_coordinates().is_empty());
}

#[test]
fn coordinate_only_locations_become_isolated_nodes() {
    let dir = fixtures_dir();
    let network =
        load_network(&dir.join("adjacencies.txt"), &dir.join("coordinates.csv")).unwrap();

    assert!(network.graph().contains("Honolulu"));
    assert!(network.graph().neighbours("Honolulu").is_empty());
}

#[test]
fn load_graph_reads_edges_symmetrically() {
    let graph = load_graph(&fixtures_dir().join("adjacencies.txt")).unwrap();

    assert_eq!(graph.len(), 13);
    assert_eq!(graph.neighbours("Seattle"), ["Portland", "Boise"]);
    assert!(graph.neighbours("Portland").iter().any(|n| n == "Seattle"));
}

#[test]
fn malformed_adjacency_lines_are_skipped() {
    let input = "A B\n\nlonely\nC D E\n  B   C  \n";
    let graph = parse_adjacency(Cursor::new(input)).unwrap().build();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.neighbours("B"), ["A", "C"]);
    assert!(!graph.contains("lonely"));
    assert!(!graph.contains("E"));
}

#[test]
fn header_row_is_tolerated() {
    let input = "name,latitude,longitude\nA, 10.5 ,20\nB,-1,-2\n";
    let registry = parse_locations(Cursor::new(input), Path::new("inline.csv")).unwrap();

    assert_eq!(registry.len(), 2);
    let a = registry.get("A").unwrap();
    assert_eq!((a.latitude, a.longitude), (10.5, 20.0));
}

#[test]
fn short_records_are_skipped() {
    let input = "A,1,2\nB,3\nC,4,5,6\nD,7,8\n";
    let registry = parse_locations(Cursor::new(input), Path::new("inline.csv")).unwrap();

    assert!(registry.contains("A"));
    assert!(!registry.contains("B"));
    assert!(!registry.contains("C"));
    assert!(registry.contains("D"));
}

#[test]
fn non_numeric_coordinates_report_file_and_line() {
    let input = "A,1,2\nB,north,2\n";
    let err = parse_locations(Cursor::new(input), Path::new("coords.csv")).unwrap_err();

    match err {
        Error::InvalidLocationRecord { path, line, message } => {
            assert_eq!(path, Path::new("coords.csv"));
            assert_eq!(line, 2);
            assert!(message.contains("north"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let input = "A,91,0\n";
    let err = parse_locations(Cursor::new(input), Path::new("coords.csv")).unwrap_err();
    assert!(matches!(err, Error::InvalidCoordinates { ref name, .. } if name == "A"));
}

#[test]
fn duplicate_names_keep_last_record() {
    let input = "A,1,1\nA,2,2\n";
    let registry = parse_locations(Cursor::new(input), Path::new("coords.csv")).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("A").unwrap().latitude, 2.0);
}

#[test]
fn edges_to_uncharted_locations_are_reported() {
    let dir = tempdir().unwrap();
    let adjacency = dir.path().join("adjacencies.txt");
    let coordinates = dir.path().join("coordinates.csv");
    fs::write(&adjacency, "A B\nB Ghost\n").unwrap();
    fs::write(&coordinates, "A,0,0\nB,0,1\nIsland,5,5\n").unwrap();

    let network = load_network(&adjacency, &coordinates).unwrap();
    assert_eq!(network.locations_without_coordinates(), vec!["Ghost"]);
    assert_eq!(network.isolated_locations(), vec!["Island"]);
    assert_eq!(network.graph().len(), 4);
}

#[test]
fn missing_files_surface_io_errors() {
    let dir = tempdir().unwrap();
    let err = load_registry(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));

    let err = load_graph(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
