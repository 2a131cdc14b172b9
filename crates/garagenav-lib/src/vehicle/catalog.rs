//! Vehicle catalog loading and management.
//!
//! Vehicles are loaded from CSV files with flexible header names, or taken
//! from the built-in garage roster.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Error, Result};

use super::attributes::{Vehicle, VehicleType};

/// Similarity floor for "did you mean" suggestions.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Canonical column name -> accepted header synonyms (already normalized).
const COLUMN_SYNONYMS: &[(&str, &[&str])] = &[
    ("name", &["name", "vehicle", "vehicle_name", "vehiclename"]),
    ("kind", &["kind", "type", "vehicle_type", "vehicletype", "category"]),
    ("mass_kg", &["mass_kg", "mass", "masskg", "weight_kg"]),
    (
        "engine_power_hp",
        &["engine_power_hp", "engine_power", "power_hp", "power", "horsepower", "hp"],
    ),
    (
        "drag_coefficient",
        &["drag_coefficient", "dragcoefficient", "drag", "cd"],
    ),
    (
        "frontal_area_m2",
        &["frontal_area_m2", "frontal_area", "frontalarea", "area_m2", "area"],
    ),
    ("max_speed_mps", &["max_speed_mps", "max_speed", "maxspeed", "top_speed"]),
    (
        "acceleration_mps2",
        &["acceleration_mps2", "acceleration", "accel"],
    ),
];

/// Collection of vehicle definitions.
#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    vehicles: HashMap<String, Vehicle>,
    source: Option<PathBuf>,
}

impl VehicleCatalog {
    /// The three vehicles parked in the garage at start.
    pub fn builtin() -> Self {
        let roster = [
            vehicle("Lightning GT", VehicleType::SportsCar, 1400.0, 450.0, 0.28, 2.2, 95.0, 12.0),
            vehicle("Thunder Truck", VehicleType::Truck, 2500.0, 380.0, 0.42, 3.5, 55.0, 6.0),
            vehicle("Velocity Viper", VehicleType::RaceCar, 1100.0, 600.0, 0.25, 1.8, 105.0, 15.0),
        ];
        let vehicles = roster
            .into_iter()
            .map(|vehicle| (normalize_name(&vehicle.name), vehicle))
            .collect();
        Self {
            vehicles,
            source: None,
        }
    }

    /// Load a vehicle catalog from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        debug!(path = %path.display(), vehicles = catalog.len(), "loaded vehicle catalog");
        Ok(catalog)
    }

    /// Load a vehicle catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let normalized_headers: Vec<String> = headers.iter().map(normalize_header).collect();

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in COLUMN_SYNONYMS {
            if let Some(index) = alts
                .iter()
                .find_map(|alt| normalized_headers.iter().position(|h| h == alt))
            {
                index_map.insert(*canon, index);
            }
        }

        let missing: Vec<&str> = COLUMN_SYNONYMS
            .iter()
            .map(|(canon, _)| *canon)
            .filter(|canon| !index_map.contains_key(canon))
            .collect();
        if !missing.is_empty() {
            return Err(Error::VehicleDataValidation {
                message: format!(
                    "vehicle data missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut vehicles = HashMap::new();
        for (offset, result) in csv_reader.records().enumerate() {
            let record = result?;
            // Header occupies line 1.
            let row = Row {
                record: &record,
                index_map: &index_map,
                line: offset + 2,
            };

            let name = row.text("name")?;
            let vehicle = Vehicle {
                kind: row.text("kind")?.parse()?,
                mass_kg: row.number("mass_kg", &name)?,
                engine_power_hp: row.number("engine_power_hp", &name)?,
                drag_coefficient: row.number("drag_coefficient", &name)?,
                frontal_area_m2: row.number("frontal_area_m2", &name)?,
                max_speed_mps: row.number("max_speed_mps", &name)?,
                acceleration_mps2: row.number("acceleration_mps2", &name)?,
                installed_parts: Vec::new(),
                name,
            };
            vehicle.validate()?;

            let key = normalize_name(&vehicle.name);
            if vehicles.contains_key(&key) {
                return Err(Error::DuplicateVehicleName { name: vehicle.name });
            }
            vehicles.insert(key, vehicle);
        }

        Ok(Self {
            vehicles,
            source: None,
        })
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Get a vehicle by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Vehicle> {
        self.vehicles.get(&normalize_name(name))
    }

    /// Resolve a free-form vehicle name.
    ///
    /// Exact names win, then the first vehicle (alphabetically) whose name
    /// contains the query.
    pub fn resolve(&self, query: &str) -> Result<&Vehicle> {
        if let Some(vehicle) = self.get(query) {
            return Ok(vehicle);
        }
        let needle = normalize_name(query);
        if !needle.is_empty() {
            if let Some(vehicle) = self
                .vehicles_sorted()
                .into_iter()
                .find(|vehicle| vehicle.name.to_lowercase().contains(&needle))
            {
                return Ok(vehicle);
            }
        }
        Err(Error::UnknownVehicle {
            name: query.to_string(),
            suggestions: self.fuzzy_matches(query, 3),
        })
    }

    /// Get a sorted list of all vehicle names.
    pub fn vehicle_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.vehicles.values().map(|v| v.name.clone()).collect();
        names.sort();
        names
    }

    /// Get all vehicles sorted by name.
    pub fn vehicles_sorted(&self) -> Vec<&Vehicle> {
        let mut vehicles: Vec<&Vehicle> = self.vehicles.values().collect();
        vehicles.sort_by(|a, b| a.name.cmp(&b.name));
        vehicles
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = normalize_name(name);
        let mut scored: Vec<(f64, String)> = self
            .vehicles
            .values()
            .map(|v| (strsim::jaro_winkler(&needle, &v.name.to_lowercase()), v.name.clone()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        scored.into_iter().take(limit).map(|(_, name)| name).collect()
    }
}

/// One CSV record together with its column mapping.
struct Row<'a> {
    record: &'a StringRecord,
    index_map: &'a BTreeMap<&'static str, usize>,
    line: usize,
}

impl Row<'_> {
    fn text(&self, field: &str) -> Result<String> {
        self.index_map
            .get(field)
            .and_then(|&i| self.record.get(i))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::VehicleDataValidation {
                message: format!("missing {field} at line {}", self.line),
            })
    }

    fn number(&self, field: &str, name: &str) -> Result<f64> {
        self.text(field)?
            .parse::<f64>()
            .map_err(|e| Error::VehicleDataValidation {
                message: format!(
                    "invalid {field} for vehicle '{name}' at line {}: {e}",
                    self.line
                ),
            })
    }
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    name: &str,
    kind: VehicleType,
    mass_kg: f64,
    engine_power_hp: f64,
    drag_coefficient: f64,
    frontal_area_m2: f64,
    max_speed_mps: f64,
    acceleration_mps2: f64,
) -> Vehicle {
    Vehicle {
        name: name.to_string(),
        kind,
        mass_kg,
        engine_power_hp,
        drag_coefficient,
        frontal_area_m2,
        max_speed_mps,
        acceleration_mps2,
        installed_parts: Vec::new(),
    }
}

/// Normalize header strings for robust matching.
fn normalize_header(header: &str) -> String {
    header
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Normalize a vehicle name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn builtin_roster_is_valid() {
        let catalog = VehicleCatalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.vehicles_sorted().iter().all(|v| v.validate().is_ok()));
        assert_eq!(
            catalog.vehicle_names(),
            vec!["Lightning GT", "Thunder Truck", "Velocity Viper"]
        );
    }

    #[test]
    fn header_synonyms_are_accepted() {
        let csv = "Vehicle,Type,Mass,HP,Cd,Frontal Area,Top-Speed,Accel\n\
                   Roadster,classic car,900,120,0.35,1.9,50,5\n";
        let catalog = VehicleCatalog::from_reader(Cursor::new(csv)).expect("parse synonyms");
        let roadster = catalog.get("roadster").expect("vehicle exists");
        assert_eq!(roadster.kind, VehicleType::ClassicCar);
        assert_eq!(roadster.frontal_area_m2, 1.9);
        assert_eq!(roadster.max_speed_mps, 50.0);
    }

    #[test]
    fn missing_columns_are_reported() {
        let csv = "name,type,mass_kg\nRoadster,truck,900\n";
        let err = VehicleCatalog::from_reader(Cursor::new(csv)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("engine_power_hp"), "{message}");
        assert!(message.contains("acceleration_mps2"), "{message}");
    }

    #[test]
    fn resolve_falls_back_to_substring_then_suggestions() {
        let catalog = VehicleCatalog::builtin();
        assert_eq!(catalog.resolve("viper").unwrap().name, "Velocity Viper");
        assert_eq!(catalog.resolve("LIGHTNING GT").unwrap().name, "Lightning GT");

        match catalog.resolve("Thunder Truk") {
            Err(Error::UnknownVehicle { suggestions, .. }) => {
                assert_eq!(suggestions.first().map(String::as_str), Some("Thunder Truck"));
            }
            other => panic!("expected UnknownVehicle, got {other:?}"),
        }
    }
}
