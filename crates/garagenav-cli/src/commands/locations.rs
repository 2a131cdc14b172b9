//! Locations command handler for listing the layout.

use std::fmt::Write;

use anyhow::Result;

use super::AppContext;
use crate::output::{to_json, OutputFormat};

pub fn handle_locations_command(ctx: &AppContext) -> Result<String> {
    let locations = ctx.graph.locations();
    match ctx.format {
        OutputFormat::Json => to_json(locations).map(|json| json + "\n"),
        OutputFormat::Compact => Ok(locations
            .iter()
            .map(|location| location.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
            + "\n"),
        OutputFormat::Text => {
            let p = ctx.palette;
            let mut buffer = String::new();
            let _ = writeln!(buffer, "Locations ({}):", locations.len());
            for location in locations {
                let exits = location
                    .open_exits()
                    .map(|(direction, target)| {
                        let name = ctx.graph.location_name(target).unwrap_or("<unknown>");
                        format!("{}{direction}{} -> {name}", p.direction, p.reset)
                    })
                    .collect::<Vec<_>>();
                let exits = if exits.is_empty() {
                    "none".to_string()
                } else {
                    exits.join(", ")
                };

                let mut facilities = Vec::new();
                if location.has_vehicle_access {
                    facilities.push("vehicles");
                }
                if location.has_computer {
                    facilities.push("computer");
                }
                let facilities = if facilities.is_empty() {
                    String::new()
                } else {
                    format!(" {}[{}]{}", p.muted, facilities.join(", "), p.reset)
                };

                let _ = writeln!(
                    buffer,
                    "{:>3}  {}{}{} ({:.1}, {:.1}){facilities}",
                    location.id,
                    p.name,
                    location.name,
                    p.reset,
                    location.coordinates.x,
                    location.coordinates.y,
                );
                let _ = writeln!(buffer, "     exits: {exits}");
            }
            Ok(buffer)
        }
    }
}
