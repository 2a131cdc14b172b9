//! Vehicle data types, performance formulas, parts, and catalog management.
//!
//! - [`attributes`] - Vehicle physical attributes and part installation
//! - [`performance`] - Terminal velocity, acceleration, braking, drag, power and lap time
//! - [`parts`] - Installable aftermarket parts
//! - [`catalog`] - Vehicle catalog loading and management
//! - [`constants`] - Shared constants used across calculations
//!
//! # Example
//!
//! ```
//! use garagenav_lib::vehicle::{default_parts, find_part, lap_time, VehicleCatalog};
//!
//! let catalog = VehicleCatalog::builtin();
//! let mut viper = catalog.resolve("viper").unwrap().clone();
//! let parts = default_parts();
//! viper.install_part(find_part(&parts, "turbo").unwrap().clone()).unwrap();
//!
//! let seconds = lap_time(&viper, 5000.0, 12).unwrap();
//! assert!(seconds > 0.0);
//! ```

pub mod attributes;
pub mod catalog;
pub mod constants;
pub mod parts;
pub mod performance;

pub use attributes::{Vehicle, VehicleType};
pub use catalog::VehicleCatalog;
pub use parts::{default_parts, find_part, Part, PartType};
pub use performance::{
    acceleration_time, braking_distance, drag_force, lap_time, power_required, terminal_velocity,
    PerformanceReport, PerformanceScenario,
};
