//! Route planning over a [`LocationGraph`].
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (Dijkstra, A*)
//! - [`RouteRequest`] - High-level route planning request using location names
//! - [`RoutePlan`] - Planned route result with per-hop directions
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Each algorithm is wrapped in a [`RoutePlanner`] implementation and chosen
//! by [`select_planner`], so `plan_route` never matches on the algorithm.
//!
//! # Example
//!
//! ```
//! use garagenav_lib::{garage_layout, plan_route, RouteAlgorithm, RouteRequest};
//!
//! let graph = garage_layout().unwrap();
//! let request = RouteRequest::new("Garage Entrance", "Showroom")
//!     .with_algorithm(RouteAlgorithm::Dijkstra);
//! let plan = plan_route(&graph, &request).unwrap();
//! assert_eq!(plan.steps.first(), Some(&0));
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::LocationGraph;
use crate::location::{Direction, LocationId};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (uniform-cost expansion).
    Dijkstra,
    /// A* search guided by straight-line distance.
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(RouteAlgorithm::Dijkstra),
            "a-star" | "astar" | "a*" => Ok(RouteAlgorithm::AStar),
            other => Err(Error::invalid_parameter(format!(
                "unknown routing algorithm '{other}'"
            ))),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Request a route with the default algorithm (A*).
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: LocationId,
    pub goal: LocationId,
    pub steps: Vec<LocationId>,
    /// Direction taken out of each step except the last.
    pub directions: Vec<Direction>,
    /// Total Euclidean distance along `steps`.
    pub distance: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Direction of every hop in `steps`.
fn hop_directions(graph: &LocationGraph, steps: &[LocationId]) -> Result<Vec<Direction>> {
    steps
        .windows(2)
        .map(|pair| {
            graph
                .direction_between(pair[0], pair[1])
                .ok_or(Error::InvalidRoute {
                    from: pair[0],
                    to: pair[1],
                })
        })
        .collect()
}

/// Compute a route between two named locations.
///
/// Names resolve exactly first, then by substring (lowest id wins).
pub fn plan_route(graph: &LocationGraph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = graph.resolve(&request.start)?;
    let goal = graph.resolve(&request.goal)?;

    let planner = select_planner(request);
    let route = planner.find_path(graph, start, goal)?;
    let directions = hop_directions(graph, &route.steps)?;

    debug!(
        algorithm = %planner.algorithm(),
        start,
        goal,
        hops = route.hop_count(),
        distance = route.cost,
        "planned route"
    );

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        start,
        goal,
        steps: route.steps,
        directions,
        distance: route.cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_plan_hop_count() {
        let plan = RoutePlan {
            algorithm: RouteAlgorithm::Dijkstra,
            start: 1,
            goal: 3,
            steps: vec![1, 2, 3],
            directions: vec![Direction::North, Direction::East],
            distance: 20.0,
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn route_plan_empty_hop_count() {
        let plan = RoutePlan {
            algorithm: RouteAlgorithm::AStar,
            start: 1,
            goal: 1,
            steps: vec![1],
            directions: Vec::new(),
            distance: 0.0,
        };
        assert_eq!(plan.hop_count(), 0);
    }

    #[test]
    fn algorithm_names_round_trip_through_display() {
        for algorithm in [RouteAlgorithm::Dijkstra, RouteAlgorithm::AStar] {
            assert_eq!(algorithm.to_string().parse::<RouteAlgorithm>().unwrap(), algorithm);
        }
        assert_eq!("A*".parse::<RouteAlgorithm>().unwrap(), RouteAlgorithm::AStar);
        assert!("bfs".parse::<RouteAlgorithm>().is_err());
    }

    #[test]
    fn request_defaults_to_a_star() {
        let request = RouteRequest::new("a", "b");
        assert_eq!(request.algorithm, RouteAlgorithm::AStar);
        assert_eq!(
            request.with_algorithm(RouteAlgorithm::Dijkstra).algorithm,
            RouteAlgorithm::Dijkstra
        );
    }
}
