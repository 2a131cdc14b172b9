//! Route command handler for planning paths between locations.

use anyhow::{Context, Result};
use clap::ValueEnum;

use garagenav_lib::{plan_route, RouteAlgorithm, RouteRequest, RouteSummary};

use super::AppContext;
use crate::output::render_route;

/// Algorithm choice exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    #[default]
    #[value(name = "a-star", alias = "astar")]
    AStar,
    Dijkstra,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: String,
    pub to: String,
    pub algorithm: AlgorithmArg,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone())
            .with_algorithm(self.algorithm.into())
    }
}

/// Plan a route and render it in the context's output format.
pub fn handle_route_command(ctx: &AppContext, args: &RouteCommandArgs) -> Result<String> {
    let request = args.to_request();
    let plan = plan_route(&ctx.graph, &request)
        .with_context(|| format!("failed to plan route from '{}' to '{}'", args.from, args.to))?;
    let summary = RouteSummary::from_plan(&ctx.graph, &plan)?;
    render_route(&summary, ctx.format)
}
