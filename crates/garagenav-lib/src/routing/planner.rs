//! Route planning strategies.
//!
//! The `RoutePlanner` trait lets `plan_route` stay independent of the search
//! algorithm in use.

use crate::error::Result;
use crate::graph::LocationGraph;
use crate::location::LocationId;
use crate::path::{astar, find_route_dijkstra, Route};

use super::{RouteAlgorithm, RouteRequest};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm on the given graph.
    fn find_path(&self, graph: &LocationGraph, start: LocationId, goal: LocationId)
        -> Result<Route>;
}

/// Dijkstra's algorithm planner; expands locations in cost order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &LocationGraph,
        start: LocationId,
        goal: LocationId,
    ) -> Result<Route> {
        find_route_dijkstra(graph, start, goal)
    }
}

/// A* planner using Euclidean distance as the heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &LocationGraph,
        start: LocationId,
        goal: LocationId,
    ) -> Result<Route> {
        astar(graph, start, goal)
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{garage_layout, rooms};

    #[test]
    fn select_planner_chooses_correct_type() {
        let request = RouteRequest::new("A", "B");
        assert_eq!(select_planner(&request).algorithm(), RouteAlgorithm::AStar);

        let request = request.with_algorithm(RouteAlgorithm::Dijkstra);
        assert_eq!(select_planner(&request).algorithm(), RouteAlgorithm::Dijkstra);
    }

    #[test]
    fn planners_agree_on_cost() {
        let graph = garage_layout().unwrap();
        let a = AStarPlanner
            .find_path(&graph, rooms::GARAGE_ENTRANCE, rooms::SHOWROOM)
            .unwrap();
        let d = DijkstraPlanner
            .find_path(&graph, rooms::GARAGE_ENTRANCE, rooms::SHOWROOM)
            .unwrap();
        assert!((a.cost - d.cost).abs() < 1e-9);
    }
}
