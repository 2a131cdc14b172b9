//! Performance command handler: physics estimates for one vehicle.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use garagenav_lib::vehicle::constants::{HP_TO_WATTS, METERS_TO_FEET, MPS_TO_MPH};
use garagenav_lib::vehicle::{default_parts, find_part};
use garagenav_lib::{
    acceleration_time, braking_distance, drag_force, lap_time, power_required, terminal_velocity,
    PerformanceReport, PerformanceScenario, Vehicle,
};

use super::AppContext;
use crate::output::{to_json, OutputFormat};

/// Which estimate to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Calculation {
    #[default]
    All,
    Terminal,
    Acceleration,
    Braking,
    Drag,
    Power,
    Lap,
}

/// Arguments for the performance command.
#[derive(Debug, Clone)]
pub struct PerformanceCommandArgs {
    pub vehicle: String,
    pub calc: Calculation,
    /// Part names (substring match) to fit before computing.
    pub install: Vec<String>,
    /// Overrides the acceleration target and braking start speed (m/s).
    pub speed: Option<f64>,
    pub track_length: Option<f64>,
    pub turns: Option<u32>,
}

impl PerformanceCommandArgs {
    pub fn scenario(&self) -> PerformanceScenario {
        let defaults = PerformanceScenario::default();
        PerformanceScenario {
            target_speed_mps: self.speed.unwrap_or(defaults.target_speed_mps),
            braking_speed_mps: self.speed.unwrap_or(defaults.braking_speed_mps),
            track_length_m: self.track_length.unwrap_or(defaults.track_length_m),
            turns: self.turns.unwrap_or(defaults.turns),
        }
    }
}

/// Which figure a [`Metric`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    TerminalVelocity,
    AccelerationTime,
    BrakingDistance,
    DragForce,
    PowerRequired,
    LapTime,
}

impl MetricKind {
    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::TerminalVelocity => "m/s",
            MetricKind::AccelerationTime | MetricKind::LapTime => "s",
            MetricKind::BrakingDistance => "m",
            MetricKind::DragForce => "N",
            MetricKind::PowerRequired => "W",
        }
    }
}

/// A single computed value with its unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub key: MetricKind,
    pub value: f64,
    pub unit: &'static str,
}

#[derive(Debug, Serialize)]
struct PerformanceOutput<'a> {
    vehicle: &'a Vehicle,
    scenario: PerformanceScenario,
    metrics: Vec<Metric>,
}

pub fn handle_performance_command(
    ctx: &AppContext,
    args: &PerformanceCommandArgs,
) -> Result<String> {
    let mut vehicle = ctx.catalog.resolve(&args.vehicle)?.clone();

    let parts = default_parts();
    for name in &args.install {
        let part = find_part(&parts, name)?.clone();
        let part_name = part.name.clone();
        vehicle
            .install_part(part)
            .with_context(|| format!("failed to install {part_name} on {}", vehicle.name))?;
    }

    let scenario = args.scenario();
    let metrics = compute_metrics(&vehicle, &scenario, args.calc)?;

    if ctx.format == OutputFormat::Json {
        let output = PerformanceOutput {
            vehicle: &vehicle,
            scenario,
            metrics,
        };
        return to_json(&output).map(|json| json + "\n");
    }

    let p = ctx.palette;
    let mut buffer = String::new();
    if ctx.format == OutputFormat::Text {
        let _ = writeln!(
            buffer,
            "=== Performance: {}{}{} ({}) ===",
            p.name,
            vehicle.name,
            p.reset,
            vehicle.kind
        );
        if !vehicle.installed_parts.is_empty() {
            let names = vehicle
                .installed_parts
                .iter()
                .map(|part| part.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(buffer, "{}Installed parts: {names}{}", p.muted, p.reset);
        }
    }
    for metric in &metrics {
        let _ = writeln!(buffer, "{}", describe(metric, &vehicle, &scenario));
    }
    Ok(buffer)
}

/// Compute the requested metrics; `All` goes through [`PerformanceReport`].
pub fn compute_metrics(
    vehicle: &Vehicle,
    scenario: &PerformanceScenario,
    calc: Calculation,
) -> Result<Vec<Metric>> {
    let metrics = match calc {
        Calculation::All => {
            let report = PerformanceReport::for_vehicle(vehicle, scenario)?;
            vec![
                metric(MetricKind::TerminalVelocity, report.terminal_velocity_mps),
                metric(MetricKind::AccelerationTime, report.acceleration_time_s),
                metric(MetricKind::BrakingDistance, report.braking_distance_m),
                metric(MetricKind::DragForce, report.drag_force_n),
                metric(MetricKind::PowerRequired, report.power_required_w),
                metric(MetricKind::LapTime, report.lap_time_s),
            ]
        }
        Calculation::Terminal => vec![metric(
            MetricKind::TerminalVelocity,
            terminal_velocity(vehicle)?,
        )],
        Calculation::Acceleration => vec![metric(
            MetricKind::AccelerationTime,
            acceleration_time(vehicle, scenario.target_speed_mps)?,
        )],
        Calculation::Braking => vec![metric(
            MetricKind::BrakingDistance,
            braking_distance(vehicle, scenario.braking_speed_mps)?,
        )],
        Calculation::Drag => vec![metric(
            MetricKind::DragForce,
            drag_force(vehicle, vehicle.max_speed_mps)?,
        )],
        Calculation::Power => vec![metric(
            MetricKind::PowerRequired,
            power_required(vehicle, vehicle.max_speed_mps)?,
        )],
        Calculation::Lap => vec![metric(
            MetricKind::LapTime,
            lap_time(vehicle, scenario.track_length_m, scenario.turns)?,
        )],
    };
    Ok(metrics)
}

fn metric(key: MetricKind, value: f64) -> Metric {
    Metric {
        key,
        value,
        unit: key.unit(),
    }
}

fn describe(metric: &Metric, vehicle: &Vehicle, scenario: &PerformanceScenario) -> String {
    let v = metric.value;
    match metric.key {
        MetricKind::TerminalVelocity => {
            format!("Terminal velocity: {v:.2} m/s ({:.1} mph)", v * MPS_TO_MPH)
        }
        MetricKind::AccelerationTime => format!(
            "0-{:.0} mph time: {v:.2} s",
            scenario.target_speed_mps * MPS_TO_MPH
        ),
        MetricKind::BrakingDistance => format!(
            "Braking distance from {:.0} mph: {v:.2} m ({:.1} ft)",
            scenario.braking_speed_mps * MPS_TO_MPH,
            v * METERS_TO_FEET
        ),
        MetricKind::DragForce => format!(
            "Drag force at max speed ({:.1} m/s): {v:.0} N",
            vehicle.max_speed_mps
        ),
        MetricKind::PowerRequired => format!(
            "Power required at max speed: {:.0} kW ({:.0} hp)",
            v / 1000.0,
            v / HP_TO_WATTS
        ),
        MetricKind::LapTime => format!(
            "Estimated lap time ({:.0} m, {} turns): {v:.1} s",
            scenario.track_length_m, scenario.turns
        ),
    }
}
