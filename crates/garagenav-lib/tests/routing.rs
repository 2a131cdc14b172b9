mod common;

use garagenav_lib::layout::rooms;
use garagenav_lib::{
    garage_layout, plan_route, Direction, Error, LocationGraph, RouteAlgorithm, RouteRequest,
};

use common::fixtures_dir;

#[test]
fn a_star_route_plan_succeeds() {
    let graph = garage_layout().unwrap();
    let request = RouteRequest::new("Garage Entrance", "Showroom");
    let plan = plan_route(&graph, &request).expect("route exists");

    assert_eq!(plan.algorithm, RouteAlgorithm::AStar);
    assert_eq!(plan.start, rooms::GARAGE_ENTRANCE);
    assert_eq!(plan.goal, rooms::SHOWROOM);
    assert_eq!(plan.hop_count(), 4);
    assert_eq!(plan.distance, 40.0);
    assert_eq!(plan.directions.len(), plan.hop_count());
}

#[test]
fn dijkstra_route_plan_records_directions() {
    let graph = garage_layout().unwrap();
    let request =
        RouteRequest::new("Showroom", "Paint Booth").with_algorithm(RouteAlgorithm::Dijkstra);
    let plan = plan_route(&graph, &request).expect("route exists");

    assert_eq!(plan.algorithm, RouteAlgorithm::Dijkstra);
    assert_eq!(
        plan.directions,
        vec![
            Direction::West,
            Direction::South,
            Direction::West,
            Direction::North,
            Direction::East,
        ]
    );
    assert_eq!(plan.distance, 50.0);
}

#[test]
fn directions_follow_the_exit_table() {
    let graph = garage_layout().unwrap();
    let plan = plan_route(&graph, &RouteRequest::new("Tool Room", "Testing Track")).unwrap();
    for (hop, direction) in plan.steps.windows(2).zip(&plan.directions) {
        assert_eq!(graph.location(hop[0]).unwrap().exit(*direction), hop[1]);
    }
}

#[test]
fn names_resolve_by_substring() {
    let graph = garage_layout().unwrap();
    let plan = plan_route(&graph, &RouteRequest::new("office", "lab")).unwrap();
    assert_eq!(plan.start, rooms::OFFICE);
    assert_eq!(plan.goal, rooms::COMPUTER_LAB);
}

#[test]
fn unknown_location_includes_suggestions() {
    let graph = garage_layout().unwrap();
    let err = plan_route(&graph, &RouteRequest::new("Workshp", "Showroom"))
        .expect_err("should fail with unknown location");

    match &err {
        Error::UnknownLocation { name, suggestions } => {
            assert_eq!(name, "Workshp");
            assert!(suggestions.contains(&"Workshop".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("Did you mean"));
}

#[test]
fn same_start_and_goal_is_zero_hops() {
    let graph = garage_layout().unwrap();
    let plan = plan_route(&graph, &RouteRequest::new("Office", "Office")).unwrap();
    assert_eq!(plan.steps, vec![rooms::OFFICE]);
    assert!(plan.directions.is_empty());
    assert_eq!(plan.distance, 0.0);
}

#[test]
fn fixture_layout_routes_like_builtin() {
    let graph = LocationGraph::from_path(&fixtures_dir().join("garage_layout.json")).unwrap();
    for algorithm in [RouteAlgorithm::AStar, RouteAlgorithm::Dijkstra] {
        let request = RouteRequest::new("Entrance", "Testing").with_algorithm(algorithm);
        let plan = plan_route(&graph, &request).unwrap();
        assert_eq!(plan.goal, rooms::TESTING_TRACK);
        assert_eq!(plan.distance, 40.0);
    }
}
