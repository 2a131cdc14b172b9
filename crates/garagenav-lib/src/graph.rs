use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::location::{Coordinates, Direction, Location, LocationId, MAX_LOCATIONS};

/// Similarity floor for "did you mean" suggestions.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Immutable navigation graph indexed by [`LocationId`].
///
/// Built once from a location table and never mutated afterwards. Cloning is
/// cheap because the storage is shared.
#[derive(Debug, Clone)]
pub struct LocationGraph {
    locations: Arc<Vec<Location>>,
    name_to_id: Arc<HashMap<String, LocationId>>,
}

impl LocationGraph {
    /// Validate a location table and build a graph from it.
    pub fn from_locations(locations: Vec<Location>) -> Result<Self> {
        if locations.is_empty() {
            return Err(invalid_layout("layout must contain at least one location"));
        }
        if locations.len() > MAX_LOCATIONS {
            return Err(invalid_layout(format!(
                "layout has {} locations; at most {MAX_LOCATIONS} are supported",
                locations.len()
            )));
        }

        let len = locations.len();
        let mut name_to_id = HashMap::with_capacity(len);
        for (index, location) in locations.iter().enumerate() {
            if location.id != index {
                return Err(invalid_layout(format!(
                    "location '{}' has id {} but sits at index {index}",
                    location.name, location.id
                )));
            }
            if location.name.trim().is_empty() {
                return Err(invalid_layout(format!("location {index} has an empty name")));
            }
            if !location.coordinates.is_finite() {
                return Err(invalid_layout(format!(
                    "location '{}' has non-finite coordinates",
                    location.name
                )));
            }
            for direction in Direction::ALL {
                let target = location.exit(direction);
                if target >= len {
                    return Err(invalid_layout(format!(
                        "location '{}' exits {direction} to unknown id {target}",
                        location.name
                    )));
                }
            }
            if name_to_id
                .insert(normalize_name(&location.name), location.id)
                .is_some()
            {
                return Err(invalid_layout(format!(
                    "duplicate location name '{}'",
                    location.name
                )));
            }
        }

        debug!(locations = len, "built location graph");

        Ok(Self {
            locations: Arc::new(locations),
            name_to_id: Arc::new(name_to_id),
        })
    }

    /// Load a graph from a JSON array of locations.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let locations: Vec<Location> = serde_json::from_reader(reader)?;
        Self::from_locations(locations)
    }

    /// Load a graph from a JSON layout file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let graph = Self::from_reader(file)?;
        debug!(path = %path.display(), "loaded location layout");
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All locations in id order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location record for `id`, bounds-checked.
    pub fn location(&self, id: LocationId) -> Result<&Location> {
        self.locations.get(id).ok_or(Error::OutOfRange {
            id,
            len: self.locations.len(),
        })
    }

    /// The four raw `(direction, target)` exit entries of a location.
    ///
    /// Closed directions show up as self-loops.
    pub fn neighbours(&self, id: LocationId) -> Result<[(Direction, LocationId); 4]> {
        let location = self.location(id)?;
        Ok(Direction::ALL.map(|direction| (direction, location.exit(direction))))
    }

    pub fn coordinates(&self, id: LocationId) -> Result<Coordinates> {
        Ok(self.location(id)?.coordinates)
    }

    pub fn has_exit(&self, id: LocationId, direction: Direction) -> Result<bool> {
        Ok(self.location(id)?.has_exit(direction))
    }

    /// Traversable exits of a location.
    pub fn open_exits(&self, id: LocationId) -> Result<Vec<(Direction, LocationId)>> {
        Ok(self.location(id)?.open_exits().collect())
    }

    /// Euclidean distance between two locations.
    pub fn edge_weight(&self, from: LocationId, to: LocationId) -> Result<f64> {
        let a = self.coordinates(from)?;
        let b = self.coordinates(to)?;
        Ok(a.distance_to(&b))
    }

    /// First direction (in [`Direction::ALL`] order) leading from `from` to `to`.
    pub fn direction_between(&self, from: LocationId, to: LocationId) -> Option<Direction> {
        let location = self.locations.get(from)?;
        location
            .open_exits()
            .find(|(_, target)| *target == to)
            .map(|(direction, _)| direction)
    }

    /// Whether `from -> to` is a traversable edge.
    pub fn is_edge(&self, from: LocationId, to: LocationId) -> bool {
        self.direction_between(from, to).is_some()
    }

    /// Lookup a location name by identifier.
    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.locations.get(id).map(|location| location.name.as_str())
    }

    /// Lookup a location identifier by its case-insensitive name.
    pub fn location_id_by_name(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(&normalize_name(name)).copied()
    }

    /// Resolve a free-form query to a location.
    ///
    /// Exact (case-insensitive) names win; otherwise the lowest-id location
    /// whose name contains the query is returned.
    pub fn find_location(&self, query: &str) -> Option<LocationId> {
        if let Some(id) = self.location_id_by_name(query) {
            return Some(id);
        }
        let needle = normalize_name(query);
        if needle.is_empty() {
            return None;
        }
        self.locations
            .iter()
            .find(|location| location.name.to_lowercase().contains(&needle))
            .map(|location| location.id)
    }

    /// Like [`find_location`](Self::find_location), but unknown names become
    /// [`Error::UnknownLocation`] carrying up to three suggestions.
    pub fn resolve(&self, query: &str) -> Result<LocationId> {
        self.find_location(query)
            .ok_or_else(|| Error::UnknownLocation {
                name: query.to_string(),
                suggestions: self.fuzzy_location_matches(query, 3),
            })
    }

    /// Names that closely resemble `name`, best match first.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .iter()
            .map(|location| {
                let score = strsim::jaro_winkler(&needle, &location.name.to_lowercase());
                (score, location.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

fn invalid_layout(message: impl Into<String>) -> Error {
    Error::InvalidLayout {
        message: message.into(),
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Vec<Location> {
        vec![
            Location::new(0, "West End", Coordinates::new(0.0, 0.0)).with_exit(Direction::East, 1),
            Location::new(1, "Middle", Coordinates::new(3.0, 4.0))
                .with_exit(Direction::West, 0)
                .with_exit(Direction::East, 2),
            Location::new(2, "East End", Coordinates::new(6.0, 8.0)),
        ]
    }

    #[test]
    fn rejects_empty_layout() {
        let err = LocationGraph::from_locations(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidLayout { .. }));
    }

    #[test]
    fn rejects_oversized_layout() {
        let locations = (0..=MAX_LOCATIONS)
            .map(|id| Location::new(id, format!("Room {id}"), Coordinates::default()))
            .collect();
        let err = LocationGraph::from_locations(locations).unwrap_err();
        assert!(matches!(err, Error::InvalidLayout { .. }));
    }

    #[test]
    fn rejects_misplaced_ids_and_dangling_exits() {
        let mut shuffled = line();
        shuffled.swap(0, 1);
        assert!(matches!(
            LocationGraph::from_locations(shuffled),
            Err(Error::InvalidLayout { .. })
        ));

        let mut dangling = line();
        dangling[2] = dangling[2].clone().with_exit(Direction::North, 7);
        assert!(matches!(
            LocationGraph::from_locations(dangling),
            Err(Error::InvalidLayout { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut locations = line();
        locations[2].name = "middle".to_string();
        assert!(matches!(
            LocationGraph::from_locations(locations),
            Err(Error::InvalidLayout { .. })
        ));
    }

    #[test]
    fn neighbours_include_self_loops() {
        let graph = LocationGraph::from_locations(line()).unwrap();
        let neighbours = graph.neighbours(0).unwrap();
        assert_eq!(
            neighbours,
            [
                (Direction::North, 0),
                (Direction::South, 0),
                (Direction::East, 1),
                (Direction::West, 0),
            ]
        );
        assert_eq!(graph.open_exits(0).unwrap(), vec![(Direction::East, 1)]);
    }

    #[test]
    fn out_of_range_queries_fail() {
        let graph = LocationGraph::from_locations(line()).unwrap();
        assert!(matches!(
            graph.coordinates(3),
            Err(Error::OutOfRange { id: 3, len: 3 })
        ));
        assert!(matches!(graph.neighbours(9), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn edge_weight_and_direction() {
        let graph = LocationGraph::from_locations(line()).unwrap();
        assert_eq!(graph.edge_weight(0, 1).unwrap(), 5.0);
        assert_eq!(graph.direction_between(1, 2), Some(Direction::East));
        assert_eq!(graph.direction_between(2, 1), None);
        assert!(graph.is_edge(1, 0));
        assert!(!graph.is_edge(0, 0));
    }

    #[test]
    fn find_location_prefers_exact_then_substring() {
        let graph = LocationGraph::from_locations(line()).unwrap();
        assert_eq!(graph.find_location("middle"), Some(1));
        assert_eq!(graph.find_location("end"), Some(0));
        assert_eq!(graph.find_location("east"), Some(2));
        assert_eq!(graph.find_location("   "), None);
        assert_eq!(graph.find_location("attic"), None);
    }

    #[test]
    fn fuzzy_matches_suggest_close_names() {
        let graph = LocationGraph::from_locations(line()).unwrap();
        let matches = graph.fuzzy_location_matches("Midle", 3);
        assert_eq!(matches.first().map(String::as_str), Some("Middle"));
    }

    #[test]
    fn resolve_reports_unknown_names_with_suggestions() {
        let graph = LocationGraph::from_locations(line()).unwrap();
        assert_eq!(graph.resolve("middle").unwrap(), 1);
        match graph.resolve("Midle") {
            Err(Error::UnknownLocation { name, suggestions }) => {
                assert_eq!(name, "Midle");
                assert_eq!(suggestions.first().map(String::as_str), Some("Middle"));
            }
            other => panic!("expected UnknownLocation, got {other:?}"),
        }
    }
}
