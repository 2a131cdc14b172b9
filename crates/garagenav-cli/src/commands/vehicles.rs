//! Vehicles command handler for listing the catalog.

use std::fmt::Write;

use anyhow::Result;

use garagenav_lib::vehicle::constants::MPS_TO_MPH;

use super::AppContext;
use crate::output::{to_json, OutputFormat};

pub fn handle_vehicles_command(ctx: &AppContext) -> Result<String> {
    let vehicles = ctx.catalog.vehicles_sorted();
    match ctx.format {
        OutputFormat::Json => to_json(&vehicles).map(|json| json + "\n"),
        OutputFormat::Compact => Ok(ctx.catalog.vehicle_names().join(", ") + "\n"),
        OutputFormat::Text => {
            if vehicles.is_empty() {
                return Ok("No vehicles available in catalog.\n".to_string());
            }
            let p = ctx.palette;
            let mut buffer = String::new();
            let _ = writeln!(buffer, "Available vehicles ({}):", vehicles.len());
            let _ = writeln!(
                buffer,
                "{:<16} {:<12} {:>10} {:>8} {:>6} {:>9} {:>16}",
                "Name", "Type", "Mass (kg)", "Power", "Cd", "Area m2", "Top speed"
            );
            for vehicle in vehicles {
                let _ = writeln!(
                    buffer,
                    "{}{:<16}{} {:<12} {:>10.0} {:>6.0}hp {:>6.2} {:>9.2} {:>6.1} m/s {}({:.0} mph){}",
                    p.name,
                    vehicle.name,
                    p.reset,
                    vehicle.kind.label(),
                    vehicle.mass_kg,
                    vehicle.engine_power_hp,
                    vehicle.drag_coefficient,
                    vehicle.frontal_area_m2,
                    vehicle.max_speed_mps,
                    p.muted,
                    vehicle.max_speed_mps * MPS_TO_MPH,
                    p.reset,
                );
            }
            Ok(buffer)
        }
    }
}
