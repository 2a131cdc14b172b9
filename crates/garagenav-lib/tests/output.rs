mod common;

use garagenav_lib::layout::rooms;
use garagenav_lib::{
    dijkstra, dijkstra_all, garage_layout, plan_route, CostSummary, RouteAlgorithm, RouteRenderMode,
    RouteRequest, RouteSummary,
};

use common::isolated_goal_graph;

#[test]
fn route_summary_serializes_with_names() {
    let graph = garage_layout().unwrap();
    let plan = plan_route(&graph, &RouteRequest::new("Office", "Tool Room")).unwrap();
    let summary = RouteSummary::from_plan(&graph, &plan).unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["algorithm"], "a-star");
    assert_eq!(json["hops"], 3);
    assert_eq!(json["start"]["name"], "Office");
    assert_eq!(json["goal"]["name"], "Tool Room");
    assert_eq!(json["steps"][0]["direction"], "west");
    assert!(json["steps"][3].get("direction").is_none());
}

#[test]
fn text_rendering_mirrors_directions() {
    let graph = garage_layout().unwrap();
    let request =
        RouteRequest::new("Office", "Tool Room").with_algorithm(RouteAlgorithm::Dijkstra);
    let plan = plan_route(&graph, &request).unwrap();
    let text = RouteSummary::from_plan(&graph, &plan).unwrap().render_text();

    assert!(text.starts_with("Route: Office -> Tool Room (3 hops, 30.0 m, algorithm: dijkstra)"));
    assert!(text.contains("1. Office -> west"));
    assert!(text.contains("2. Garage Entrance -> north"));
    assert!(text.contains("3. Main Garage Bay -> west"));
    assert!(text.contains("4. Tool Room"));
}

#[test]
fn compact_rendering_is_one_line() {
    let graph = garage_layout().unwrap();
    let plan = plan_route(&graph, &RouteRequest::new("Entrance", "Office")).unwrap();
    let text = RouteSummary::from_plan(&graph, &plan)
        .unwrap()
        .render(RouteRenderMode::Compact);
    assert_eq!(text, "Garage Entrance -> Office\n");
}

#[test]
fn cost_summary_marks_unreachable_locations() {
    let graph = isolated_goal_graph();
    let table = dijkstra_all(&graph, 0).unwrap();
    let summary = CostSummary::from_table(&graph, &table);

    assert_eq!(summary.entries.len(), 4);
    assert_eq!(summary.entries[2].cost, Some(20.0));
    assert_eq!(summary.entries[2].predecessor, Some(1));
    assert_eq!(summary.entries[3].cost, None);
    assert!(summary.render_text().contains("unreachable"));
}

#[test]
fn cost_summary_for_builtin_layout() {
    let graph = garage_layout().unwrap();
    let table = dijkstra_all(&graph, rooms::SHOWROOM).unwrap();
    let summary = CostSummary::from_table(&graph, &table);
    let text = summary.render_text();

    assert!(text.starts_with("Costs from Showroom:"));
    assert_eq!(summary.entries[rooms::PAINT_BOOTH].cost, Some(50.0));
    assert!(summary.goal.is_none());
}

#[test]
fn goal_directed_table_marks_unexplored_rows_not_reached() {
    let graph = garage_layout().unwrap();
    let table = dijkstra(&graph, rooms::GARAGE_ENTRANCE, rooms::WORKSHOP).unwrap();
    let summary = CostSummary::from_table(&graph, &table);
    let text = summary.render_text();

    assert_eq!(summary.entries[rooms::PAINT_BOOTH].cost, None);
    assert_eq!(summary.entries[rooms::SHOWROOM].cost, None);
    let paint_row = text
        .lines()
        .find(|line| line.contains("Paint Booth"))
        .expect("paint booth row");
    assert!(paint_row.ends_with("not reached"), "{paint_row}");
    assert!(!text.contains("unreachable"), "{text}");
}

#[test]
fn compact_costs_list_known_costs_on_one_line() {
    let graph = garage_layout().unwrap();
    let table = dijkstra(&graph, rooms::GARAGE_ENTRANCE, rooms::WORKSHOP).unwrap();
    let line = CostSummary::from_table(&graph, &table).render_compact();

    assert!(line.starts_with("Garage Entrance=0.00, Main Garage Bay=10.00, Workshop=20.00"));
    assert!(line.ends_with('\n'));
    assert_eq!(line.lines().count(), 1);
    assert!(!line.contains("Paint Booth"));
}
