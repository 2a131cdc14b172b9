//! Garage navigation and vehicle performance library.
//!
//! This crate models a small building as a graph of locations with compass
//! exits, finds shortest routes through it with Dijkstra or A*, and estimates
//! vehicle performance (top speed, acceleration, braking, drag, power, lap
//! time). Higher-level consumers such as the CLI should only depend on the
//! items exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod layout;
pub mod location;
pub mod output;
pub mod path;
pub mod routing;
pub mod vehicle;

pub use error::{Error, Result};
pub use graph::LocationGraph;
pub use layout::{garage_layout, garage_locations};
pub use location::{Coordinates, Direction, Exits, Location, LocationId, MAX_LOCATIONS};
pub use output::{CostEntry, CostSummary, RouteRenderMode, RouteSummary};
pub use path::{
    astar, dijkstra, dijkstra_all, find_route_dijkstra, heuristic, route_cost, DijkstraTable,
    NodeState, Route, MAX_PATH_LENGTH,
};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
pub use vehicle::{
    acceleration_time, braking_distance, drag_force, lap_time, power_required, terminal_velocity,
    Part, PartType, PerformanceReport, PerformanceScenario, Vehicle, VehicleCatalog, VehicleType,
};
