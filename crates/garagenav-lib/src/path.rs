use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::graph::LocationGraph;
use crate::location::LocationId;

/// Upper bound on reconstructed path length.
pub const MAX_PATH_LENGTH: usize = 100;

/// Multiplier applied to the A* heuristic. Values above 1.0 lose optimality.
pub const HEURISTIC_WEIGHT: f64 = 1.0;

/// Successful search outcome: the visited locations from start to goal inclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub steps: Vec<LocationId>,
    /// Sum of Euclidean edge weights along `steps`.
    pub cost: f64,
}

impl Route {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<LocationId> {
        self.steps.first().copied()
    }

    pub fn goal(&self) -> Option<LocationId> {
        self.steps.last().copied()
    }
}

/// Per-node bookkeeping produced by [`dijkstra`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeState {
    /// Best known cost from the start; `f64::INFINITY` when unreached.
    pub cost: f64,
    pub predecessor: Option<LocationId>,
    pub visited: bool,
}

impl NodeState {
    fn unreached() -> Self {
        Self {
            cost: f64::INFINITY,
            predecessor: None,
            visited: false,
        }
    }
}

/// Cost and predecessor table covering every node of the graph.
///
/// Costs are final for visited nodes and for the goal. Nodes that were still
/// pending when the search stopped at the goal keep their tentative cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DijkstraTable {
    start: LocationId,
    goal: Option<LocationId>,
    states: Vec<NodeState>,
}

impl DijkstraTable {
    pub fn start(&self) -> LocationId {
        self.start
    }

    /// Goal the search stopped at, if one was given.
    pub fn goal(&self) -> Option<LocationId> {
        self.goal
    }

    pub fn states(&self) -> &[NodeState] {
        &self.states
    }

    pub fn state(&self, id: LocationId) -> Result<&NodeState> {
        self.states.get(id).ok_or(Error::OutOfRange {
            id,
            len: self.states.len(),
        })
    }

    /// Finite cost to `id`, or `None` when unreached or out of range.
    pub fn cost(&self, id: LocationId) -> Option<f64> {
        self.states
            .get(id)
            .map(|state| state.cost)
            .filter(|cost| cost.is_finite())
    }

    pub fn predecessor(&self, id: LocationId) -> Option<LocationId> {
        self.states.get(id).and_then(|state| state.predecessor)
    }

    pub fn is_visited(&self, id: LocationId) -> bool {
        self.states.get(id).is_some_and(|state| state.visited)
    }

    pub fn is_reachable(&self, id: LocationId) -> bool {
        self.cost(id).is_some()
    }

    /// Rebuild the route to `goal` by walking predecessors.
    pub fn route_to(&self, goal: LocationId) -> Result<Route> {
        let state = self.state(goal)?;
        if !state.cost.is_finite() {
            return Err(Error::NoPath {
                start: self.start,
                goal,
            });
        }
        let steps = reconstruct_path(self.start, goal, |node| self.predecessor(node))?;
        Ok(Route {
            steps,
            cost: state.cost,
        })
    }
}

/// Run Dijkstra's algorithm from `start`, stopping once `goal` is selected.
///
/// Edge weights are the Euclidean distances between location coordinates and
/// self-loop exits are never traversed.
pub fn dijkstra(
    graph: &LocationGraph,
    start: LocationId,
    goal: LocationId,
) -> Result<DijkstraTable> {
    graph.location(goal)?;
    run_dijkstra(graph, start, Some(goal))
}

/// Run Dijkstra's algorithm from `start` over every reachable location.
pub fn dijkstra_all(graph: &LocationGraph, start: LocationId) -> Result<DijkstraTable> {
    run_dijkstra(graph, start, None)
}

/// Lowest-cost route from `start` to `goal` using Dijkstra's algorithm.
pub fn find_route_dijkstra(
    graph: &LocationGraph,
    start: LocationId,
    goal: LocationId,
) -> Result<Route> {
    dijkstra(graph, start, goal)?.route_to(goal)
}

fn run_dijkstra(
    graph: &LocationGraph,
    start: LocationId,
    goal: Option<LocationId>,
) -> Result<DijkstraTable> {
    graph.location(start)?;

    let mut states = vec![NodeState::unreached(); graph.len()];
    let mut queue = BinaryHeap::new();
    let mut expanded = 0usize;

    states[start].cost = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let current = entry.node;
        if states[current].visited || entry.cost.0 > states[current].cost {
            continue;
        }
        if Some(current) == goal {
            break;
        }

        states[current].visited = true;
        expanded += 1;

        for (_, neighbour) in graph.location(current)?.open_exits() {
            if states[neighbour].visited {
                continue;
            }

            let next_cost = states[current].cost + graph.edge_weight(current, neighbour)?;
            if next_cost < states[neighbour].cost {
                trace!(from = current, to = neighbour, cost = next_cost, "relaxed edge");
                states[neighbour].cost = next_cost;
                states[neighbour].predecessor = Some(current);
                queue.push(QueueEntry::new(neighbour, next_cost));
            }
        }
    }

    debug!(start, ?goal, expanded, "dijkstra finished");

    Ok(DijkstraTable {
        start,
        goal,
        states,
    })
}

/// Run A* search guided by the straight-line distance to `goal`.
///
/// Among open nodes with equal `f` the lowest id is expanded first.
pub fn astar(graph: &LocationGraph, start: LocationId, goal: LocationId) -> Result<Route> {
    graph.location(start)?;
    graph.location(goal)?;

    let len = graph.len();
    let mut g_score = vec![f64::INFINITY; len];
    let mut f_score = vec![f64::INFINITY; len];
    let mut open = vec![false; len];
    let mut closed = vec![false; len];
    let mut came_from: Vec<Option<LocationId>> = vec![None; len];
    let mut queue = BinaryHeap::new();
    let mut expanded = 0usize;

    g_score[start] = 0.0;
    f_score[start] = HEURISTIC_WEIGHT * heuristic(graph, start, goal)?;
    open[start] = true;
    queue.push(AStarEntry::new(start, f_score[start]));

    while let Some(entry) = queue.pop() {
        let current = entry.node;
        if !open[current] || entry.estimate.0 > f_score[current] {
            continue;
        }

        if current == goal {
            let steps = reconstruct_path(start, goal, |node| came_from[node])?;
            debug!(start, goal, expanded, hops = steps.len() - 1, "a* found route");
            return Ok(Route {
                steps,
                cost: g_score[goal],
            });
        }

        open[current] = false;
        closed[current] = true;
        expanded += 1;

        for (_, neighbour) in graph.location(current)?.open_exits() {
            if closed[neighbour] {
                continue;
            }

            let tentative_g = g_score[current] + graph.edge_weight(current, neighbour)?;
            if !open[neighbour] {
                open[neighbour] = true;
            } else if tentative_g >= g_score[neighbour] {
                continue;
            }

            came_from[neighbour] = Some(current);
            g_score[neighbour] = tentative_g;
            f_score[neighbour] = tentative_g + HEURISTIC_WEIGHT * heuristic(graph, neighbour, goal)?;
            queue.push(AStarEntry::new(neighbour, f_score[neighbour]));
        }
    }

    debug!(start, goal, expanded, "a* exhausted open set");
    Err(Error::NoPath { start, goal })
}

/// Straight-line distance between two locations.
pub fn heuristic(graph: &LocationGraph, from: LocationId, goal: LocationId) -> Result<f64> {
    graph.edge_weight(from, goal)
}

/// Total Euclidean cost of a sequence of locations.
///
/// Every consecutive pair must be a traversable (non self-loop) edge.
pub fn route_cost(graph: &LocationGraph, steps: &[LocationId]) -> Result<f64> {
    let Some(&first) = steps.first() else {
        return Err(Error::EmptyRoutePlan);
    };
    graph.location(first)?;

    let mut total = 0.0;
    for pair in steps.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        graph.location(to)?;
        if !graph.is_edge(from, to) {
            return Err(Error::InvalidRoute { from, to });
        }
        total += graph.edge_weight(from, to)?;
    }
    Ok(total)
}

fn reconstruct_path(
    start: LocationId,
    goal: LocationId,
    parent: impl Fn(LocationId) -> Option<LocationId>,
) -> Result<Vec<LocationId>> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        if path.len() >= MAX_PATH_LENGTH {
            warn!(start, goal, limit = MAX_PATH_LENGTH, "path reconstruction cut off");
            return Err(Error::PathLengthExceeded {
                limit: MAX_PATH_LENGTH,
            });
        }
        path.push(node);
        if node == start {
            break;
        }
        current = parent(node);
    }

    if path.last() != Some(&start) {
        return Err(Error::NoPath { start, goal });
    }

    path.reverse();
    Ok(path)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: LocationId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: LocationId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then id.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: LocationId,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: LocationId, estimate: f64) -> Self {
        Self {
            node,
            estimate: FloatOrd(estimate),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
