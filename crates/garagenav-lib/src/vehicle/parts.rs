//! Installable parts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category of an aftermarket part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartType {
    Engine,
    Transmission,
    Wheels,
    Brakes,
    Suspension,
    Turbocharger,
    Exhaust,
    Ecu,
}

impl PartType {
    pub fn label(self) -> &'static str {
        match self {
            PartType::Engine => "Engine",
            PartType::Transmission => "Transmission",
            PartType::Wheels => "Wheels",
            PartType::Brakes => "Brakes",
            PartType::Suspension => "Suspension",
            PartType::Turbocharger => "Turbocharger",
            PartType::Exhaust => "Exhaust",
            PartType::Ecu => "ECU",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A part that can be fitted to a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    pub kind: PartType,
    pub weight_kg: f64,
    pub cost: f64,
    /// Percentage applied to engine power (and half of it to top speed).
    pub performance_boost_pct: f64,
}

impl Part {
    pub fn new(
        name: impl Into<String>,
        kind: PartType,
        weight_kg: f64,
        cost: f64,
        performance_boost_pct: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            weight_kg,
            cost,
            performance_boost_pct,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.weight_kg, "weight_kg"),
            (self.cost, "cost"),
            (self.performance_boost_pct, "performance_boost_pct"),
        ];
        for (value, field) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::VehicleDataValidation {
                    message: format!(
                        "part '{}': {field} must be finite and non-negative",
                        self.name
                    ),
                });
            }
        }
        Ok(())
    }
}

/// The loose parts available in the garage at start.
pub fn default_parts() -> Vec<Part> {
    vec![
        Part::new("Twin-Turbo Kit", PartType::Turbocharger, 25.0, 5000.0, 30.0),
        Part::new("Racing Exhaust", PartType::Exhaust, 15.0, 2000.0, 10.0),
        Part::new("Performance ECU", PartType::Ecu, 2.0, 3500.0, 20.0),
        Part::new("Carbon Brakes", PartType::Brakes, 20.0, 4500.0, 15.0),
        Part::new("Racing Suspension", PartType::Suspension, 30.0, 3000.0, 12.0),
    ]
}

/// Find the first part whose name contains `query` (case-insensitive).
pub fn find_part<'a>(parts: &'a [Part], query: &str) -> Result<&'a Part> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(Error::UnknownPart {
            name: query.to_string(),
        });
    }
    parts
        .iter()
        .find(|part| part.name.to_lowercase().contains(&needle))
        .ok_or_else(|| Error::UnknownPart {
            name: query.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parts_are_valid() {
        let parts = default_parts();
        assert_eq!(parts.len(), 5);
        assert!(parts.iter().all(|part| part.validate().is_ok()));
    }

    #[test]
    fn find_part_matches_substrings() {
        let parts = default_parts();
        assert_eq!(find_part(&parts, "turbo").unwrap().name, "Twin-Turbo Kit");
        assert_eq!(find_part(&parts, "ECU").unwrap().kind, PartType::Ecu);
        assert!(matches!(
            find_part(&parts, "spoiler"),
            Err(Error::UnknownPart { .. })
        ));
        assert!(find_part(&parts, "").is_err());
    }

    #[test]
    fn negative_weight_is_rejected() {
        let part = Part::new("Helium", PartType::Wheels, -1.0, 0.0, 0.0);
        assert!(part.validate().is_err());
    }
}
