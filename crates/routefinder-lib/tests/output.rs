mod common;

use routefinder_lib::{plan_route, RouteRenderMode, RouteRequest, RouteSummary};

use common::fixture_network;

fn summary(start: &str, goal: &str) -> RouteSummary {
    let network = fixture_network();
    let plan = plan_route(&network, &RouteRequest::a_star(start, goal)).unwrap();
    RouteSummary::from_plan(&plan, network.registry()).unwrap()
}

#[test]
fn plain_text_lists_numbered_steps() {
    let text = summary("Seattle", "Denver").render(RouteRenderMode::PlainText);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Route: Seattle -> Denver (3 hops, algorithm: a-star)");
    assert_eq!(lines[1], "  0: Seattle");
    assert!(lines[2].starts_with("  1: Boise (+"), "{}", lines[2]);
    assert!(lines.last().unwrap().starts_with("Total distance: 1723."));
}

#[test]
fn report_mode_matches_interactive_layout() {
    let text = summary("Portland", "Cheyenne").render(RouteRenderMode::Report);

    assert!(text.starts_with("Route found:\nPortland\nBoise\nSalt_Lake_City\nCheyenne\n"));
    assert!(text.contains("Total time: "));
    assert!(text.contains(" kilometers"));
}

#[test]
fn cumulative_distance_matches_plan() {
    let network = fixture_network();
    let plan = plan_route(&network, &RouteRequest::bfs("Seattle", "Phoenix")).unwrap();
    let summary = RouteSummary::from_plan(&plan, network.registry()).unwrap();

    assert_eq!(summary.hops, plan.hop_count());
    assert!((summary.total_distance_km - plan.distance_km).abs() < 1e-9);
    let legs: f64 = summary.steps.iter().filter_map(|s| s.leg_km).sum();
    assert!((legs - summary.total_distance_km).abs() < 1e-9);
}

#[test]
fn json_summary_includes_steps() {
    let json = summary("Seattle", "Boise").to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["start"], "Seattle");
    assert_eq!(value["goal"], "Boise");
    assert_eq!(value["hops"], 1);
    assert_eq!(value["steps"][1]["name"], "Boise");
    assert!(value["steps"][0].get("leg_km").is_none());
    assert!(value["steps"][1]["leg_km"].as_f64().unwrap() > 0.0);
}
