//! Output formatting shared by the subcommands.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use garagenav_lib::{RouteRenderMode, RouteSummary};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Single-line output where the command supports it.
    Compact,
    /// Pretty-printed JSON.
    Json,
}

/// Serialize `value` as pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output as JSON")
}

/// Render a route summary in the requested format.
pub fn render_route(summary: &RouteSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Compact => Ok(summary.render(RouteRenderMode::Compact)),
        OutputFormat::Json => to_json(summary).map(|json| json + "\n"),
    }
}
