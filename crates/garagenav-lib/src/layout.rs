//! Built-in garage layout.
//!
//! Ten rooms with fixed coordinates and directed exits. Some passages are
//! one-way (for example Paint Booth east to the Showroom has no return exit).

use crate::error::Result;
use crate::graph::LocationGraph;
use crate::location::{Coordinates, Direction, Location, LocationId};

/// Identifiers of the built-in rooms.
pub mod rooms {
    use crate::location::LocationId;

    pub const GARAGE_ENTRANCE: LocationId = 0;
    pub const MAIN_GARAGE: LocationId = 1;
    pub const WORKSHOP: LocationId = 2;
    pub const PARTS_STORAGE: LocationId = 3;
    pub const PAINT_BOOTH: LocationId = 4;
    pub const TESTING_TRACK: LocationId = 5;
    pub const OFFICE: LocationId = 6;
    pub const TOOL_ROOM: LocationId = 7;
    pub const COMPUTER_LAB: LocationId = 8;
    pub const SHOWROOM: LocationId = 9;

    /// Number of built-in rooms.
    pub const COUNT: usize = 10;
}

/// Build the built-in garage graph.
pub fn garage_layout() -> Result<LocationGraph> {
    LocationGraph::from_locations(garage_locations())
}

/// The built-in location table, in id order.
pub fn garage_locations() -> Vec<Location> {
    use rooms::*;
    use Direction::{East, North, South, West};

    vec![
        room(GARAGE_ENTRANCE, "Garage Entrance", (0.0, 0.0))
            .with_description(
                "You stand at the entrance of a state-of-the-art automotive facility. \
                 The main garage lies to the north, and an office is to the east.",
            )
            .with_exit(North, MAIN_GARAGE)
            .with_exit(East, OFFICE)
            .with_facilities(true, false),
        room(MAIN_GARAGE, "Main Garage Bay", (0.0, 10.0))
            .with_description(
                "A spacious garage with hydraulic lifts and diagnostic equipment. \
                 The workshop is to the north, parts storage to the east, and the entrance to the south.",
            )
            .with_exit(North, WORKSHOP)
            .with_exit(South, GARAGE_ENTRANCE)
            .with_exit(East, PARTS_STORAGE)
            .with_exit(West, TOOL_ROOM)
            .with_facilities(true, false),
        room(WORKSHOP, "Workshop", (0.0, 20.0))
            .with_description(
                "A fully equipped workshop with engine hoists, welding equipment, and precision tools. \
                 The paint booth is to the east, and the main garage is south.",
            )
            .with_exit(South, MAIN_GARAGE)
            .with_exit(East, PAINT_BOOTH)
            .with_facilities(true, false),
        room(PARTS_STORAGE, "Parts Storage", (10.0, 10.0))
            .with_description(
                "Shelves lined with automotive parts, from engines to electronics. \
                 The main garage is to the west, and the computer lab is north.",
            )
            .with_exit(North, COMPUTER_LAB)
            .with_exit(West, MAIN_GARAGE),
        room(PAINT_BOOTH, "Paint Booth", (10.0, 20.0))
            .with_description(
                "A climate-controlled paint booth with professional spray equipment. \
                 The workshop is to the west, and the testing track is north.",
            )
            .with_exit(North, TESTING_TRACK)
            .with_exit(East, SHOWROOM)
            .with_exit(West, WORKSHOP)
            .with_facilities(true, false),
        room(TESTING_TRACK, "Testing Track", (10.0, 30.0))
            .with_description(
                "An indoor testing track with sensors and timing equipment. \
                 Perfect for calculating vehicle performance. The paint booth is south.",
            )
            .with_exit(South, PAINT_BOOTH)
            .with_facilities(true, true),
        room(OFFICE, "Office", (10.0, 0.0))
            .with_description(
                "A comfortable office with blueprints on the walls and a desk covered in paperwork. \
                 The entrance is to the west.",
            )
            .with_exit(West, GARAGE_ENTRANCE)
            .with_facilities(false, true),
        room(TOOL_ROOM, "Tool Room", (-10.0, 10.0))
            .with_description(
                "Organized racks of tools from basic wrenches to advanced diagnostic scanners. \
                 The main garage is to the east.",
            )
            .with_exit(East, MAIN_GARAGE),
        room(COMPUTER_LAB, "Computer Lab", (10.0, 20.0))
            .with_description(
                "Advanced computer systems for vehicle diagnostics, pathfinding algorithms, \
                 and performance calculations. The parts storage is south.",
            )
            .with_exit(South, PARTS_STORAGE)
            .with_exit(East, SHOWROOM)
            .with_facilities(false, true),
        room(SHOWROOM, "Showroom", (20.0, 20.0))
            .with_description(
                "A pristine showroom displaying finished vehicles under bright lights. \
                 The computer lab is to the west, and the paint booth is also west.",
            )
            .with_exit(West, COMPUTER_LAB)
            .with_facilities(true, false),
    ]
}

fn room(id: LocationId, name: &str, (x, y): (f64, f64)) -> Location {
    Location::new(id, name, Coordinates::new(x, y))
}
