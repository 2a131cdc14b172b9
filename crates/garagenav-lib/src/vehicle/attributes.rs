//! Vehicle attributes.
//!
//! A [`Vehicle`] describes the physical properties consumed by the
//! performance formulas. Only [`Vehicle::install_part`] changes them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

use super::constants::MAX_PARTS;
use super::parts::Part;

/// Closed set of vehicle categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    SportsCar,
    Truck,
    Motorcycle,
    RaceCar,
    ClassicCar,
}

impl VehicleType {
    pub fn label(self) -> &'static str {
        match self {
            VehicleType::SportsCar => "Sports Car",
            VehicleType::Truck => "Truck",
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::RaceCar => "Race Car",
            VehicleType::ClassicCar => "Classic Car",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized: String = value
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "sportscar" | "sports" => Ok(VehicleType::SportsCar),
            "truck" => Ok(VehicleType::Truck),
            "motorcycle" | "motorbike" => Ok(VehicleType::Motorcycle),
            "racecar" | "race" => Ok(VehicleType::RaceCar),
            "classiccar" | "classic" => Ok(VehicleType::ClassicCar),
            _ => Err(Error::VehicleDataValidation {
                message: format!("unknown vehicle type '{}'", value.trim()),
            }),
        }
    }
}

/// Physical attributes of a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    pub kind: VehicleType,
    pub mass_kg: f64,
    pub engine_power_hp: f64,
    pub drag_coefficient: f64,
    pub frontal_area_m2: f64,
    pub max_speed_mps: f64,
    pub acceleration_mps2: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub installed_parts: Vec<Part>,
}

impl Vehicle {
    /// Validate vehicle attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::VehicleDataValidation {
                message: "vehicle name must not be empty".to_string(),
            });
        }

        let fields = [
            (self.mass_kg, "mass_kg"),
            (self.engine_power_hp, "engine_power_hp"),
            (self.drag_coefficient, "drag_coefficient"),
            (self.frontal_area_m2, "frontal_area_m2"),
            (self.max_speed_mps, "max_speed_mps"),
            (self.acceleration_mps2, "acceleration_mps2"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::VehicleDataValidation {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        Ok(())
    }

    /// Fit a part, scaling power, top speed and mass by its boost and weight.
    ///
    /// Power grows by the full boost percentage, top speed by half of it.
    /// Each part can be fitted once.
    pub fn install_part(&mut self, part: Part) -> Result<()> {
        if self.has_part(&part.name) {
            return Err(Error::PartAlreadyInstalled {
                vehicle: self.name.clone(),
                part: part.name,
            });
        }
        if self.installed_parts.len() >= MAX_PARTS {
            return Err(Error::PartLimitReached {
                vehicle: self.name.clone(),
                limit: MAX_PARTS,
            });
        }
        part.validate()?;

        let boost = part.performance_boost_pct;
        self.engine_power_hp *= 1.0 + boost / 100.0;
        self.max_speed_mps *= 1.0 + boost / 200.0;
        self.mass_kg += part.weight_kg;

        debug!(
            vehicle = %self.name,
            part = %part.name,
            engine_power_hp = self.engine_power_hp,
            max_speed_mps = self.max_speed_mps,
            "installed part"
        );

        self.installed_parts.push(part);
        Ok(())
    }

    /// Whether a part with this name (case-insensitive) is already fitted.
    pub fn has_part(&self, name: &str) -> bool {
        self.installed_parts
            .iter()
            .any(|installed| installed.name.eq_ignore_ascii_case(name.trim()))
    }
}
