// Each module handles one CLI subcommand. main.rs parses arguments, builds an
// `AppContext` and dispatches here.

pub mod costs;
pub mod locations;
pub mod parts;
pub mod performance;
pub mod route;
pub mod vehicles;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use garagenav_lib::{garage_layout, LocationGraph, VehicleCatalog};

use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Data and presentation settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub graph: LocationGraph,
    pub catalog: VehicleCatalog,
    pub format: OutputFormat,
    pub palette: ColorPalette,
}

impl AppContext {
    /// Load the layout and vehicle catalog, falling back to the built-in data.
    pub fn load(
        layout: Option<&Path>,
        vehicles: Option<&Path>,
        format: OutputFormat,
    ) -> Result<Self> {
        let palette = if format == OutputFormat::Json {
            ColorPalette::plain()
        } else {
            ColorPalette::detect()
        };
        Ok(Self {
            graph: load_layout(layout)?,
            catalog: load_catalog(vehicles)?,
            format,
            palette,
        })
    }
}

/// Load a JSON layout, or the built-in garage when no path is given.
pub fn load_layout(path: Option<&Path>) -> Result<LocationGraph> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading layout");
            LocationGraph::from_path(path)
                .with_context(|| format!("failed to load layout from {}", path.display()))
        }
        None => garage_layout().context("built-in garage layout is invalid"),
    }
}

/// Load a CSV vehicle catalog, or the built-in roster when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<VehicleCatalog> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading vehicle data");
            VehicleCatalog::from_path(path)
                .with_context(|| format!("failed to load vehicle data from {}", path.display()))
        }
        None => Ok(VehicleCatalog::builtin()),
    }
}
