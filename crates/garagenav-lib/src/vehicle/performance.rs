//! Vehicle performance formulas.
//!
//! Simplified models tuned for gameplay feel rather
//! than rigorous physics. All functions are pure: they read a [`Vehicle`]
//! and scalar scenario values and never mutate anything.
//!
//! Vehicle attributes a formula depends on must be finite and positive;
//! speeds must be finite and non-negative. Anything else yields
//! [`Error::InvalidParameter`] instead of a NaN or infinity.

use serde::Serialize;

use crate::error::{Error, Result};

use super::attributes::Vehicle;
use super::constants::{
    AIR_DENSITY, BRAKING_FRICTION, GRAVITY, HP_TO_WATTS, SIXTY_MPH_MPS, STRAIGHT_SPEED_FACTOR,
    TURN_EXIT_PENALTY_S, TURN_SPEED_FACTOR, TURN_ZONE_LENGTH_M,
};

/// Speed (m/s) at which engine power equals aerodynamic drag power.
///
/// Formula: v = cbrt(P_watts / (0.5 × ρ × Cd × A))
pub fn terminal_velocity(vehicle: &Vehicle) -> Result<f64> {
    let power_watts = positive(vehicle.engine_power_hp, "engine_power_hp")? * HP_TO_WATTS;
    Ok((power_watts / drag_factor(vehicle)?).cbrt())
}

/// Seconds needed to reach `target_speed` (m/s) from standstill.
///
/// Formula: t = v / (a × (hp / 100) / (mass / 1000))
pub fn acceleration_time(vehicle: &Vehicle, target_speed: f64) -> Result<f64> {
    let target_speed = non_negative(target_speed, "target_speed")?;
    let acceleration = positive(vehicle.acceleration_mps2, "acceleration_mps2")?;
    let power = positive(vehicle.engine_power_hp, "engine_power_hp")?;
    let mass = positive(vehicle.mass_kg, "mass_kg")?;

    let effective_accel = acceleration * (power / 100.0) / (mass / 1000.0);
    Ok(target_speed / effective_accel)
}

/// Metres needed to stop from `initial_speed` (m/s).
///
/// Formula: d = v² / (2 × 0.8 × g). The vehicle does not influence the result.
pub fn braking_distance(_vehicle: &Vehicle, initial_speed: f64) -> Result<f64> {
    let initial_speed = non_negative(initial_speed, "initial_speed")?;
    let deceleration = BRAKING_FRICTION * GRAVITY;
    Ok((initial_speed * initial_speed) / (2.0 * deceleration))
}

/// Aerodynamic drag in newtons at `velocity` (m/s).
///
/// Formula: F = 0.5 × ρ × Cd × A × v²
pub fn drag_force(vehicle: &Vehicle, velocity: f64) -> Result<f64> {
    let velocity = non_negative(velocity, "velocity")?;
    Ok(drag_factor(vehicle)? * velocity * velocity)
}

/// Watts needed to overcome drag at `velocity` (m/s).
pub fn power_required(vehicle: &Vehicle, velocity: f64) -> Result<f64> {
    Ok(drag_force(vehicle, velocity)? * velocity)
}

/// Estimated seconds to lap a track of `track_length` metres with `turns` turns.
///
/// Each turn occupies a 50 m zone driven at 60% of max speed, the remainder
/// is driven at 90% of max speed, and each turn adds 1.5 s of re-acceleration.
pub fn lap_time(vehicle: &Vehicle, track_length: f64, turns: u32) -> Result<f64> {
    let max_speed = positive(vehicle.max_speed_mps, "max_speed_mps")?;
    let track_length = positive(track_length, "track_length")?;

    let turn_distance = f64::from(turns) * TURN_ZONE_LENGTH_M;
    if turn_distance > track_length {
        return Err(Error::invalid_parameter(format!(
            "{turns} turns need {turn_distance} m but the track is only {track_length} m"
        )));
    }
    let straight_distance = track_length - turn_distance;

    let turn_time = turn_distance / (max_speed * TURN_SPEED_FACTOR);
    let straight_time = straight_distance / (max_speed * STRAIGHT_SPEED_FACTOR);
    let exit_penalty = f64::from(turns) * TURN_EXIT_PENALTY_S;

    Ok(turn_time + straight_time + exit_penalty)
}

fn drag_factor(vehicle: &Vehicle) -> Result<f64> {
    let cd = positive(vehicle.drag_coefficient, "drag_coefficient")?;
    let area = positive(vehicle.frontal_area_m2, "frontal_area_m2")?;
    Ok(0.5 * AIR_DENSITY * cd * area)
}

fn positive(value: f64, field: &str) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid_parameter(format!(
            "{field} must be finite and positive, got {value}"
        )));
    }
    Ok(value)
}

fn non_negative(value: f64, field: &str) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::invalid_parameter(format!(
            "{field} must be finite and non-negative, got {value}"
        )));
    }
    Ok(value)
}

/// Inputs for a full performance report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceScenario {
    /// Speed used for the acceleration-time estimate (m/s).
    pub target_speed_mps: f64,
    /// Speed used for the braking-distance estimate (m/s).
    pub braking_speed_mps: f64,
    pub track_length_m: f64,
    pub turns: u32,
}

impl Default for PerformanceScenario {
    fn default() -> Self {
        Self {
            target_speed_mps: SIXTY_MPH_MPS,
            braking_speed_mps: SIXTY_MPH_MPS,
            track_length_m: 5000.0,
            turns: 12,
        }
    }
}

/// Every performance metric for one vehicle and scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub vehicle: String,
    pub scenario: PerformanceScenario,
    pub terminal_velocity_mps: f64,
    pub acceleration_time_s: f64,
    pub braking_distance_m: f64,
    /// Drag at the vehicle's max speed (N).
    pub drag_force_n: f64,
    /// Power needed at the vehicle's max speed (W).
    pub power_required_w: f64,
    pub lap_time_s: f64,
}

impl PerformanceReport {
    pub fn for_vehicle(vehicle: &Vehicle, scenario: &PerformanceScenario) -> Result<Self> {
        Ok(Self {
            vehicle: vehicle.name.clone(),
            scenario: *scenario,
            terminal_velocity_mps: terminal_velocity(vehicle)?,
            acceleration_time_s: acceleration_time(vehicle, scenario.target_speed_mps)?,
            braking_distance_m: braking_distance(vehicle, scenario.braking_speed_mps)?,
            drag_force_n: drag_force(vehicle, vehicle.max_speed_mps)?,
            power_required_w: power_required(vehicle, vehicle.max_speed_mps)?,
            lap_time_s: lap_time(vehicle, scenario.track_length_m, scenario.turns)?,
        })
    }

    pub fn power_required_kw(&self) -> f64 {
        self.power_required_w / 1000.0
    }

    pub fn power_required_hp(&self) -> f64 {
        self.power_required_w / HP_TO_WATTS
    }
}
