//! Physical constants and tuning values shared by the performance formulas.

/// Air density at sea level in kg/m³.
pub const AIR_DENSITY: f64 = 1.225;

/// Gravitational acceleration in m/s².
pub const GRAVITY: f64 = 9.81;

/// Mechanical horsepower to watts.
pub const HP_TO_WATTS: f64 = 745.7;

/// Braking deceleration as a fraction of `GRAVITY` (good brakes).
pub const BRAKING_FRICTION: f64 = 0.8;

/// Track length attributed to each turn, in metres.
pub const TURN_ZONE_LENGTH_M: f64 = 50.0;

/// Share of max speed held through turns.
pub const TURN_SPEED_FACTOR: f64 = 0.6;

/// Share of max speed held on straights.
pub const STRAIGHT_SPEED_FACTOR: f64 = 0.9;

/// Seconds lost re-accelerating out of each turn.
pub const TURN_EXIT_PENALTY_S: f64 = 1.5;

/// 60 mph expressed in m/s; the default acceleration and braking scenario.
pub const SIXTY_MPH_MPS: f64 = 26.8;

pub const MPS_TO_MPH: f64 = 2.237;
pub const METERS_TO_FEET: f64 = 3.281;

/// Maximum number of parts a single vehicle can carry.
pub const MAX_PARTS: usize = 50;
