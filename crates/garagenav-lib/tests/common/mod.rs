//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use garagenav_lib::{Coordinates, Direction, Location, LocationGraph, LocationId};
use tempfile::TempDir;

/// Path to the fixtures directory shared by the workspace.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Build a location with the given exits and every other exit closed.
#[allow(dead_code)]
pub fn location(
    id: LocationId,
    name: &str,
    (x, y): (f64, f64),
    exits: &[(Direction, LocationId)],
) -> Location {
    exits
        .iter()
        .fold(Location::new(id, name, Coordinates::new(x, y)), |loc, &(d, t)| {
            loc.with_exit(d, t)
        })
}

/// Two locations ten units apart joined in both directions.
#[allow(dead_code)]
pub fn two_node_graph() -> LocationGraph {
    LocationGraph::from_locations(vec![
        location(0, "A", (0.0, 0.0), &[(Direction::East, 1)]),
        location(1, "B", (10.0, 0.0), &[(Direction::West, 0)]),
    ])
    .expect("two-node graph is valid")
}

/// Four locations where the goal (3) only has a self-loop and nothing leads to it.
#[allow(dead_code)]
pub fn isolated_goal_graph() -> LocationGraph {
    LocationGraph::from_locations(vec![
        location(0, "A", (0.0, 0.0), &[(Direction::North, 1)]),
        location(1, "B", (0.0, 10.0), &[(Direction::South, 0), (Direction::East, 2)]),
        location(2, "C", (10.0, 10.0), &[(Direction::West, 1)]),
        location(3, "D", (10.0, 0.0), &[]),
    ])
    .expect("isolated goal graph is valid")
}

/// Scratch directory holding copies of data files.
#[allow(dead_code)]
pub struct TestEnv {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Write `contents` to `name` inside the scratch directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write scratch file");
        path
    }

    /// Copy a fixture into the scratch directory.
    pub fn copy_fixture(&self, name: &str) -> PathBuf {
        let target = self.root.join(name);
        fs::copy(fixtures_dir().join(name), &target).expect("copy fixture");
        target
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}
