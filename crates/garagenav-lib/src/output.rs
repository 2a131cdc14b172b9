use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::LocationGraph;
use crate::location::{Direction, LocationId};
use crate::path::DijkstraTable;
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteRenderMode {
    /// One numbered line per step with the direction to take.
    #[default]
    PlainText,
    /// All step names on a single line.
    Compact,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Exit taken to reach the next step; `None` on the goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Distance to the next step; `None` on the goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub distance: f64,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary with resolved location names.
    pub fn from_plan(graph: &LocationGraph, plan: &RoutePlan) -> Result<Self> {
        let (Some(&first), Some(&last)) = (plan.steps.first(), plan.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut steps = Vec::with_capacity(plan.steps.len());
        for (index, &id) in plan.steps.iter().enumerate() {
            let (direction, distance) = match plan.steps.get(index + 1) {
                Some(&next) => (
                    plan.directions.get(index).copied(),
                    Some(graph.edge_weight(id, next)?),
                ),
                None => (None, None),
            };
            steps.push(RouteStep {
                index,
                id,
                name: graph.location_name(id).map(str::to_string),
                direction,
                distance,
            });
        }

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            distance: plan.distance,
            start: endpoint(graph, first),
            goal: endpoint(graph, last),
            steps,
        })
    }

    /// Render the summary as the numbered step list.
    pub fn render_text(&self) -> String {
        self.render(RouteRenderMode::PlainText)
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {:.1} m, algorithm: {})",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.distance,
            self.algorithm
        );
        for step in &self.steps {
            match step.direction {
                Some(direction) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}. {} -> {}",
                        step.index + 1,
                        step.display_name(),
                        direction
                    );
                }
                None => {
                    let _ = writeln!(buffer, "{:>3}. {}", step.index + 1, step.display_name());
                }
            }
        }
        buffer
    }

    fn render_compact(&self) -> String {
        let joined = self
            .steps
            .iter()
            .map(RouteStep::display_name)
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{joined}\n")
    }
}

fn endpoint(graph: &LocationGraph, id: LocationId) -> RouteEndpoint {
    RouteEndpoint {
        id,
        name: graph.location_name(id).map(str::to_string),
    }
}

/// One row of a [`CostSummary`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CostEntry {
    pub id: LocationId,
    pub name: String,
    /// `None` when the location was not reached.
    pub cost: Option<f64>,
    pub predecessor: Option<LocationId>,
    pub visited: bool,
}

/// Dijkstra cost table with resolved location names.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CostSummary {
    pub start: RouteEndpoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<RouteEndpoint>,
    pub entries: Vec<CostEntry>,
}

impl CostSummary {
    pub fn from_table(graph: &LocationGraph, table: &DijkstraTable) -> Self {
        let entries = graph
            .locations()
            .iter()
            .map(|location| CostEntry {
                id: location.id,
                name: location.name.clone(),
                cost: table.cost(location.id),
                predecessor: table.predecessor(location.id),
                visited: table.is_visited(location.id),
            })
            .collect();

        Self {
            start: endpoint(graph, table.start()),
            goal: table.goal().map(|goal| endpoint(graph, goal)),
            entries,
        }
    }

    /// One row per location. Without a cost a row reads `unreachable` for a
    /// full table, or `not reached` when the search stopped at its goal.
    pub fn render_text(&self) -> String {
        let missing = if self.goal.is_some() {
            "not reached"
        } else {
            "unreachable"
        };
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Costs from {}:", self.start.display_name());
        for entry in &self.entries {
            let cost = entry
                .cost
                .map(|cost| format!("{cost:.2}"))
                .unwrap_or_else(|| missing.to_string());
            let via = entry
                .predecessor
                .map(|id| format!(" (via {id})"))
                .unwrap_or_default();
            let _ = writeln!(buffer, "{:>3} {:<18} {cost}{via}", entry.id, entry.name);
        }
        buffer
    }

    /// `Name=cost` pairs for every location with a known cost, on one line.
    pub fn render_compact(&self) -> String {
        let joined = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry
                    .cost
                    .map(|cost| format!("{}={cost:.2}", entry.name))
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{joined}\n")
    }
}
