//! Costs command handler: prints the Dijkstra cost and predecessor table.

use std::fmt::Write;

use anyhow::Result;

use garagenav_lib::{dijkstra, dijkstra_all, CostSummary, Error};

use super::AppContext;
use crate::output::{to_json, OutputFormat};

pub fn handle_costs_command(ctx: &AppContext, from: &str, to: Option<&str>) -> Result<String> {
    let start = ctx.graph.resolve(from)?;
    let goal = to.map(|name| ctx.graph.resolve(name)).transpose()?;

    let table = match goal {
        Some(goal) => dijkstra(&ctx.graph, start, goal)?,
        None => dijkstra_all(&ctx.graph, start)?,
    };
    let summary = CostSummary::from_table(&ctx.graph, &table);

    match ctx.format {
        OutputFormat::Json => return to_json(&summary).map(|json| json + "\n"),
        OutputFormat::Compact => return Ok(summary.render_compact()),
        OutputFormat::Text => {}
    }

    let mut text = summary.render_text();
    if let Some(goal) = goal {
        let name = ctx.graph.location_name(goal).unwrap_or("<unknown>");
        match table.route_to(goal) {
            Ok(route) => {
                let _ = writeln!(
                    text,
                    "Cost to {name}: {:.2} ({} hops)",
                    route.cost,
                    route.hop_count()
                );
            }
            Err(Error::NoPath { .. }) => {
                let _ = writeln!(text, "No path to {name}");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ColorPalette;
    use garagenav_lib::{garage_layout, VehicleCatalog};

    fn context(format: OutputFormat) -> AppContext {
        AppContext {
            graph: garage_layout().unwrap(),
            catalog: VehicleCatalog::builtin(),
            format,
            palette: ColorPalette::plain(),
        }
    }

    #[test]
    fn compact_costs_fit_on_one_line() {
        let out = handle_costs_command(&context(OutputFormat::Compact), "Office", None).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("Garage Entrance=10.00, Main Garage Bay=20.00"));
        assert!(out.contains("Office=0.00"));
    }

    #[test]
    fn unknown_start_is_reported_with_suggestions() {
        let err = handle_costs_command(&context(OutputFormat::Text), "Ofice", None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown location: Ofice"), "{message}");
        assert!(message.contains("Office"), "{message}");
    }
}
