//! A single directed track section between two stations.

use serde::Serialize;

use super::error::{TopologyError, TopologyResult};
use super::station::StationId;

/// Directed edge `up_station_id -> down_station_id` with a positive distance.
///
/// Sections are never mutated once built; splitting one produces two new
/// sections through [`Section::new`], so every section in a topology has
/// passed the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    up_station_id: StationId,
    down_station_id: StationId,
    distance: i64,
}

impl Section {
    /// Build a validated section.
    ///
    /// # Errors
    /// [`TopologyError::InvalidSection`] when both ends are the same station or
    /// the distance is not strictly positive.
    pub fn new(
        up_station_id: StationId,
        down_station_id: StationId,
        distance: i64,
    ) -> TopologyResult<Self> {
        if up_station_id == down_station_id {
            return Err(TopologyError::invalid_section(format!(
                "up and down station must differ (both are {})",
                up_station_id
            )));
        }
        if distance <= 0 {
            return Err(TopologyError::invalid_section(format!(
                "distance must be positive, got {}",
                distance
            )));
        }

        Ok(Self {
            up_station_id,
            down_station_id,
            distance,
        })
    }

    pub fn up_station_id(&self) -> StationId {
        self.up_station_id
    }

    pub fn down_station_id(&self) -> StationId {
        self.down_station_id
    }

    pub fn distance(&self) -> i64 {
        self.distance
    }

    /// Direction-sensitive pair comparison.
    pub fn connects(&self, up_station_id: StationId, down_station_id: StationId) -> bool {
        self.up_station_id == up_station_id && self.down_station_id == down_station_id
    }

    /// Whether either end of the section is `station_id`.
    pub fn touches(&self, station_id: StationId) -> bool {
        self.up_station_id == station_id || self.down_station_id == station_id
    }
}
