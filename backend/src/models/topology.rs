//! Line topology engine.
//!
//! A [`LineTopology`] owns the sections of one line and keeps them forming a
//! single simple directed path: exactly one head (no incoming section), exactly
//! one tail (no outgoing section), no branches, no cycles.
//!
//! Sections are indexed by their up-station, with a reverse index from
//! down-station to up-station, so walking the path and locating the section
//! that ends at a given station are both constant-time lookups.
//!
//! # Insertion
//!
//! ```text
//!   append     A ── B ── C  +  C → D        A ── B ── C ── D
//!   prepend    A ── B ── C  +  Z → A   Z ── A ── B ── C
//!   split      A ──5── B    +  A → M (2)    A ─2─ M ─3─ B
//! ```
//!
//! Every mutation validates first and only then touches the maps, so a failed
//! call leaves the topology exactly as it was.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use super::error::{TopologyError, TopologyResult};
use super::section::Section;
use super::station::StationId;

/// Ordered, connected, non-branching set of sections for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTopology {
    by_up_station: HashMap<StationId, Section>,
    // down station -> up station of the section ending there
    up_of: HashMap<StationId, StationId>,
    head: StationId,
    tail: StationId,
}

impl LineTopology {
    /// Start a topology from its first section. A topology is never empty.
    pub fn new(first: Section) -> Self {
        let head = first.up_station_id();
        let tail = first.down_station_id();
        let mut topology = Self {
            by_up_station: HashMap::new(),
            up_of: HashMap::new(),
            head,
            tail,
        };
        topology.insert_edge(first);
        topology
    }

    /// Number of sections on the line.
    pub fn section_count(&self) -> usize {
        self.by_up_station.len()
    }

    /// First station of the path.
    pub fn head(&self) -> StationId {
        self.head
    }

    /// Last station of the path.
    pub fn tail(&self) -> StationId {
        self.tail
    }

    pub fn contains_station(&self, station_id: StationId) -> bool {
        self.by_up_station.contains_key(&station_id) || self.tail == station_id
    }

    /// Whether `station_id` is the head or the tail.
    pub fn is_terminal(&self, station_id: StationId) -> bool {
        self.head == station_id || self.tail == station_id
    }

    /// Stations from head to tail.
    pub fn ordered_stations(&self) -> Vec<StationId> {
        let mut stations = Vec::with_capacity(self.by_up_station.len() + 1);
        stations.push(self.head);
        stations.extend(
            self.ordered_sections()
                .into_iter()
                .map(Section::down_station_id),
        );
        stations
    }

    /// Sections from head to tail.
    pub fn ordered_sections(&self) -> Vec<&Section> {
        std::iter::successors(self.by_up_station.get(&self.head), |section| {
            self.by_up_station.get(&section.down_station_id())
        })
        .take(self.by_up_station.len())
        .collect()
    }

    /// Sum of all section distances, saturating at `i64::MAX`.
    ///
    /// `add_section` never lets the real sum exceed `i64::MAX`, so saturation
    /// is not reachable through the public mutations.
    pub fn total_distance(&self) -> i64 {
        self.by_up_station
            .values()
            .fold(0i64, |total, section| total.saturating_add(section.distance()))
    }

    /// Insert a section, appending, prepending or splitting as required.
    ///
    /// # Errors
    /// - [`TopologyError::NoDockingPoint`] if neither station is on the line
    /// - [`TopologyError::DuplicateSection`] if the exact section exists
    /// - [`TopologyError::AlreadyRegisteredStation`] if both stations are on
    ///   the line without being an existing section
    /// - [`TopologyError::DistanceTooLong`] if a split would not leave a
    ///   positive residual distance, or an append/prepend would push the
    ///   line's total distance past `i64::MAX`
    pub fn add_section(&mut self, section: Section) -> TopologyResult<()> {
        let up = section.up_station_id();
        let down = section.down_station_id();
        let has_up = self.contains_station(up);
        let has_down = self.contains_station(down);

        if !has_up && !has_down {
            return Err(TopologyError::NoDockingPoint {
                up_station_id: up,
                down_station_id: down,
            });
        }

        if has_up && has_down {
            let exists = self
                .by_up_station
                .get(&up)
                .is_some_and(|existing| existing.connects(up, down));
            return Err(if exists {
                TopologyError::DuplicateSection {
                    up_station_id: up,
                    down_station_id: down,
                }
            } else {
                TopologyError::AlreadyRegisteredStation { station_id: down }
            });
        }

        if up == self.tail || down == self.head {
            self.check_extension(&section)?;
        }

        if up == self.tail {
            self.insert_edge(section);
            self.tail = down;
            return Ok(());
        }

        if down == self.head {
            self.insert_edge(section);
            self.head = up;
            return Ok(());
        }

        // Split the section leaving `up`: up -> down -> existing.down
        if let Some(existing) = self.by_up_station.get(&up) {
            let residual = Self::residual_distance(existing, &section)?;
            let residual = Section::new(down, existing.down_station_id(), residual)?;
            self.remove_edge(up);
            self.insert_edge(section);
            self.insert_edge(residual);
            return Ok(());
        }

        // Split the section entering `down`: existing.up -> up -> down
        if let Some(existing_up) = self.up_of.get(&down).copied() {
            if let Some(existing) = self.by_up_station.get(&existing_up) {
                let residual = Self::residual_distance(existing, &section)?;
                let residual = Section::new(existing_up, up, residual)?;
                self.remove_edge(existing_up);
                self.insert_edge(residual);
                self.insert_edge(section);
                return Ok(());
            }
        }

        Err(TopologyError::NoDockingPoint {
            up_station_id: up,
            down_station_id: down,
        })
    }

    /// Remove the section touching a terminal station and return it.
    ///
    /// # Errors
    /// - [`TopologyError::BelowMinSectionSize`] if only one section is left
    /// - [`TopologyError::NotTerminalStation`] if `station_id` is not the head
    ///   or the tail
    pub fn remove_section(&mut self, station_id: StationId) -> TopologyResult<Section> {
        if self.by_up_station.len() == 1 {
            return Err(TopologyError::BelowMinSectionSize);
        }

        let not_terminal = TopologyError::NotTerminalStation { station_id };

        if station_id == self.head {
            let removed = self.remove_edge(station_id).ok_or(not_terminal)?;
            self.head = removed.down_station_id();
            return Ok(removed);
        }

        if station_id == self.tail {
            let up = self.up_of.get(&station_id).copied().ok_or(not_terminal.clone())?;
            let removed = self.remove_edge(up).ok_or(not_terminal)?;
            self.tail = up;
            return Ok(removed);
        }

        Err(not_terminal)
    }

    // Appending or prepending grows the line; the total must stay an i64.
    fn check_extension(&self, section: &Section) -> TopologyResult<()> {
        let total = self.total_distance();
        if total.checked_add(section.distance()).is_none() {
            return Err(TopologyError::DistanceTooLong {
                requested: section.distance(),
                available: i64::MAX - total,
            });
        }
        Ok(())
    }

    fn residual_distance(existing: &Section, inserted: &Section) -> TopologyResult<i64> {
        let residual = existing.distance() - inserted.distance();
        if residual <= 0 {
            return Err(TopologyError::DistanceTooLong {
                requested: inserted.distance(),
                available: existing.distance(),
            });
        }
        Ok(residual)
    }

    fn insert_edge(&mut self, section: Section) {
        self.up_of
            .insert(section.down_station_id(), section.up_station_id());
        self.by_up_station.insert(section.up_station_id(), section);
    }

    fn remove_edge(&mut self, up_station_id: StationId) -> Option<Section> {
        let removed = self.by_up_station.remove(&up_station_id)?;
        self.up_of.remove(&removed.down_station_id());
        Some(removed)
    }
}

impl Serialize for LineTopology {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.ordered_sections())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(id: i64) -> StationId {
        StationId(id)
    }

    fn section(up: i64, down: i64, distance: i64) -> Section {
        Section::new(sid(up), sid(down), distance).unwrap()
    }

    fn ids(values: &[i64]) -> Vec<StationId> {
        values.iter().copied().map(StationId).collect()
    }

    fn distances(topology: &LineTopology) -> Vec<i64> {
        topology
            .ordered_sections()
            .into_iter()
            .map(Section::distance)
            .collect()
    }

    #[test]
    fn test_new_topology() {
        let topology = LineTopology::new(section(1, 2, 5));
        assert_eq!(topology.section_count(), 1);
        assert_eq!(topology.head(), sid(1));
        assert_eq!(topology.tail(), sid(2));
        assert_eq!(topology.ordered_stations(), ids(&[1, 2]));
    }

    #[test]
    fn test_append_to_tail() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(2, 3, 3)).unwrap();
        assert_eq!(topology.ordered_stations(), ids(&[1, 2, 3]));
        assert_eq!(distances(&topology), vec![5, 3]);
        assert_eq!(topology.tail(), sid(3));
    }

    #[test]
    fn test_prepend_to_head() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(9, 1, 4)).unwrap();
        assert_eq!(topology.ordered_stations(), ids(&[9, 1, 2]));
        assert_eq!(topology.head(), sid(9));
    }

    #[test]
    fn test_split_from_up_station() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(1, 7, 2)).unwrap();
        assert_eq!(topology.ordered_stations(), ids(&[1, 7, 2]));
        assert_eq!(distances(&topology), vec![2, 3]);
    }

    #[test]
    fn test_split_from_down_station() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(7, 2, 2)).unwrap();
        assert_eq!(topology.ordered_stations(), ids(&[1, 7, 2]));
        assert_eq!(distances(&topology), vec![3, 2]);
    }

    #[test]
    fn test_split_in_the_middle_of_a_longer_line() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(2, 3, 10)).unwrap();
        topology.add_section(section(2, 4, 4)).unwrap();
        assert_eq!(topology.ordered_stations(), ids(&[1, 2, 4, 3]));
        assert_eq!(distances(&topology), vec![5, 4, 6]);
        assert_eq!(topology.total_distance(), 15);
    }

    #[test]
    fn test_split_rejects_equal_distance() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        let before = topology.clone();
        let err = topology.add_section(section(1, 7, 5)).unwrap_err();
        assert_eq!(
            err,
            TopologyError::DistanceTooLong {
                requested: 5,
                available: 5
            }
        );
        assert_eq!(topology, before);
    }

    #[test]
    fn test_split_rejects_longer_distance() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        let err = topology.add_section(section(7, 2, 8)).unwrap_err();
        assert_eq!(err.code(), "DISTANCE_TOO_LONG");
        assert_eq!(topology.ordered_stations(), ids(&[1, 2]));
    }

    #[test]
    fn test_append_rejects_total_overflow() {
        let mut topology = LineTopology::new(section(1, 2, i64::MAX));
        let before = topology.clone();

        let err = topology.add_section(section(2, 3, 1)).unwrap_err();
        assert_eq!(
            err,
            TopologyError::DistanceTooLong {
                requested: 1,
                available: 0
            }
        );
        assert_eq!(topology, before);

        let err = topology.add_section(section(0, 1, 1)).unwrap_err();
        assert_eq!(err.code(), "DISTANCE_TOO_LONG");
        assert_eq!(topology, before);
        assert_eq!(topology.total_distance(), i64::MAX);
    }

    #[test]
    fn test_append_up_to_the_distance_limit() {
        let mut topology = LineTopology::new(section(1, 2, i64::MAX - 10));
        topology.add_section(section(2, 3, 10)).unwrap();
        assert_eq!(topology.total_distance(), i64::MAX);

        // splits conserve the total, so they still fit
        topology.add_section(section(1, 4, 5)).unwrap();
        assert_eq!(topology.total_distance(), i64::MAX);
        assert_eq!(topology.ordered_stations(), ids(&[1, 4, 2, 3]));
    }

    #[test]
    fn test_no_docking_point() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        let err = topology.add_section(section(3, 4, 1)).unwrap_err();
        assert!(matches!(err, TopologyError::NoDockingPoint { .. }));
    }

    #[test]
    fn test_duplicate_section() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        let err = topology.add_section(section(1, 2, 1)).unwrap_err();
        assert!(matches!(err, TopologyError::DuplicateSection { .. }));
    }

    #[test]
    fn test_reverse_section_is_already_registered() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        let err = topology.add_section(section(2, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            TopologyError::AlreadyRegisteredStation {
                station_id: sid(1)
            }
        );
    }

    #[test]
    fn test_shortcut_between_existing_stations_is_rejected() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(2, 3, 5)).unwrap();
        let err = topology.add_section(section(1, 3, 2)).unwrap_err();
        assert_eq!(err.code(), "ALREADY_REGISTERED_STATION_IN_SECTION");
    }

    #[test]
    fn test_remove_tail_then_below_minimum() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(2, 3, 3)).unwrap();

        let removed = topology.remove_section(sid(3)).unwrap();
        assert!(removed.connects(sid(2), sid(3)));
        assert_eq!(topology.ordered_stations(), ids(&[1, 2]));

        let err = topology.remove_section(sid(2)).unwrap_err();
        assert_eq!(err, TopologyError::BelowMinSectionSize);
        assert_eq!(topology.ordered_stations(), ids(&[1, 2]));
    }

    #[test]
    fn test_remove_head() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(2, 3, 3)).unwrap();
        topology.remove_section(sid(1)).unwrap();
        assert_eq!(topology.ordered_stations(), ids(&[2, 3]));
        assert_eq!(topology.head(), sid(2));
    }

    #[test]
    fn test_remove_interior_station_is_rejected() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(2, 3, 3)).unwrap();
        let before = topology.clone();
        let err = topology.remove_section(sid(2)).unwrap_err();
        assert_eq!(err, TopologyError::NotTerminalStation { station_id: sid(2) });
        assert_eq!(topology, before);
    }

    #[test]
    fn test_remove_unknown_station_is_not_terminal() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(2, 3, 3)).unwrap();
        let err = topology.remove_section(sid(99)).unwrap_err();
        assert_eq!(err.code(), "NOT_TERMINAL_STATION");
    }

    #[test]
    fn test_ordered_stations_is_stable() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(2, 3, 3)).unwrap();
        topology.add_section(section(0, 1, 3)).unwrap();
        topology.add_section(section(2, 5, 1)).unwrap();
        let first = topology.ordered_stations();
        assert_eq!(first, ids(&[0, 1, 2, 5, 3]));
        assert_eq!(topology.ordered_stations(), first);
    }

    #[test]
    fn test_serializes_in_path_order() {
        let mut topology = LineTopology::new(section(1, 2, 5));
        topology.add_section(section(0, 1, 2)).unwrap();
        let json = serde_json::to_value(&topology).unwrap();
        assert_eq!(json[0]["upStationId"], 0);
        assert_eq!(json[1]["upStationId"], 1);
    }
}
