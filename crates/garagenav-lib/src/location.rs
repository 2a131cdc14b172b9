//! Location records that make up the navigation graph.
//!
//! A [`Location`] carries exactly one exit per compass [`Direction`]. An exit
//! pointing back at the location itself means "no passage that way"; use
//! [`Location::has_exit`] rather than comparing ids by hand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Numeric identifier for a location; doubles as its index in the graph.
pub type LocationId = usize;

/// Upper bound on the number of locations a graph may hold.
pub const MAX_LOCATIONS: usize = 20;

/// Compass direction of an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction in exit-table order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Position of this direction inside an exit table.
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            other => Err(Error::invalid_parameter(format!(
                "unknown direction '{other}'"
            ))),
        }
    }
}

/// Planar coordinates used for distance estimates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Exit table of a location, one target per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exits {
    pub north: LocationId,
    pub south: LocationId,
    pub east: LocationId,
    pub west: LocationId,
}

impl Exits {
    /// Build an exit table where every direction is closed.
    pub fn closed(owner: LocationId) -> Self {
        Self {
            north: owner,
            south: owner,
            east: owner,
            west: owner,
        }
    }

    pub fn get(&self, direction: Direction) -> LocationId {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Entries in [`Direction::ALL`] order.
    pub fn as_array(&self) -> [LocationId; 4] {
        [self.north, self.south, self.east, self.west]
    }
}

/// A single node of the navigation graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub coordinates: Coordinates,
    pub exits: Exits,
    #[serde(default)]
    pub has_vehicle_access: bool,
    #[serde(default)]
    pub has_computer: bool,
}

impl Location {
    /// Create a location with every exit closed.
    pub fn new(id: LocationId, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            coordinates,
            exits: Exits::closed(id),
            has_vehicle_access: false,
            has_computer: false,
        }
    }

    /// Builder-style helper that opens an exit towards `target`.
    pub fn with_exit(mut self, direction: Direction, target: LocationId) -> Self {
        match direction {
            Direction::North => self.exits.north = target,
            Direction::South => self.exits.south = target,
            Direction::East => self.exits.east = target,
            Direction::West => self.exits.west = target,
        }
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_facilities(mut self, has_vehicle_access: bool, has_computer: bool) -> Self {
        self.has_vehicle_access = has_vehicle_access;
        self.has_computer = has_computer;
        self
    }

    /// Raw exit entry for a direction, including the self-loop sentinel.
    pub fn exit(&self, direction: Direction) -> LocationId {
        self.exits.get(direction)
    }

    /// Whether the exit in `direction` leads somewhere other than here.
    pub fn has_exit(&self, direction: Direction) -> bool {
        self.exit(direction) != self.id
    }

    /// Traversable exits only, in [`Direction::ALL`] order.
    pub fn open_exits(&self) -> impl Iterator<Item = (Direction, LocationId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.has_exit(*direction))
            .map(move |direction| (direction, self.exit(direction)))
    }
}
