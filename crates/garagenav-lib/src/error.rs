use thiserror::Error;

use crate::location::LocationId;

/// Convenient result alias for the garagenav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A location identifier fell outside the graph.
    #[error("location id {id} is out of range (graph has {len} locations)")]
    OutOfRange { id: LocationId, len: usize },

    /// No traversable route connects the two locations.
    #[error("no path found from location {start} to location {goal}")]
    NoPath { start: LocationId, goal: LocationId },

    /// A performance formula received a non-physical input.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A location table failed construction-time validation.
    #[error("invalid location layout: {message}")]
    InvalidLayout { message: String },

    /// A sequence of locations contained a hop that is not a traversable edge.
    #[error("route hop {from} -> {to} is not a traversable edge")]
    InvalidRoute { from: LocationId, to: LocationId },

    /// Path reconstruction walked more predecessors than allowed.
    #[error("reconstructed path exceeded {limit} locations")]
    PathLengthExceeded { limit: usize },

    /// Raised when a location name could not be resolved.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a vehicle name could not be resolved.
    #[error("unknown vehicle: {name}{}", format_suggestions(.suggestions))]
    UnknownVehicle {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a part name could not be resolved.
    #[error("unknown part: {name}")]
    UnknownPart { name: String },

    /// Raised when vehicle data fails validation.
    #[error("invalid vehicle data: {message}")]
    VehicleDataValidation { message: String },

    /// Raised when duplicate vehicle names are encountered during catalog load.
    #[error("duplicate vehicle name encountered: {name}")]
    DuplicateVehicleName { name: String },

    /// Raised when a vehicle has no room left for another part.
    #[error("vehicle {vehicle} has no room for more parts (limit {limit})")]
    PartLimitReached { vehicle: String, limit: usize },

    /// Raised when a part is fitted to a vehicle that already carries it.
    #[error("{part} is already installed on {vehicle}")]
    PartAlreadyInstalled { vehicle: String, part: String },

    /// Raised when a computed route plan lacks any locations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON layout parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for CSV catalog parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
