//! Parts command handler for listing installable parts.

use std::fmt::Write;

use anyhow::Result;

use garagenav_lib::vehicle::default_parts;

use super::AppContext;
use crate::output::{to_json, OutputFormat};

pub fn handle_parts_command(ctx: &AppContext) -> Result<String> {
    let parts = default_parts();
    match ctx.format {
        OutputFormat::Json => to_json(&parts).map(|json| json + "\n"),
        OutputFormat::Compact => Ok(parts
            .iter()
            .map(|part| part.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
            + "\n"),
        OutputFormat::Text => {
            let p = ctx.palette;
            let mut buffer = String::new();
            let _ = writeln!(buffer, "Available parts ({}):", parts.len());
            let _ = writeln!(
                buffer,
                "{:<18} {:<13} {:>11} {:>8} {:>7}",
                "Name", "Type", "Weight (kg)", "Cost", "Boost"
            );
            for part in &parts {
                let _ = writeln!(
                    buffer,
                    "{}{:<18}{} {:<13} {:>11.1} {:>8.0} {}{:>6.0}%{}",
                    p.name,
                    part.name,
                    p.reset,
                    part.kind.label(),
                    part.weight_kg,
                    part.cost,
                    p.metric,
                    part.performance_boost_pct,
                    p.reset,
                );
            }
            Ok(buffer)
        }
    }
}
