//! Line aggregate: metadata plus the topology of its sections.

use serde::Serialize;

use super::error::TopologyResult;
use super::section::Section;
use super::station::StationId;
use super::topology::LineTopology;

crate::define_id_type!(i64, LineId);

/// A stored line.
///
/// `version` is bumped by the line registry on every successful save and is
/// used to reject writes based on a stale copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub sections: LineTopology,
    pub version: u64,
}

impl Line {
    /// Rename / recolor the line. Sections are untouched.
    pub fn modify(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    pub fn add_section(&mut self, section: Section) -> TopologyResult<()> {
        self.sections.add_section(section)
    }

    pub fn remove_section(&mut self, station_id: StationId) -> TopologyResult<Section> {
        self.sections.remove_section(station_id)
    }

    pub fn ordered_stations(&self) -> Vec<StationId> {
        self.sections.ordered_stations()
    }

    pub fn contains_station(&self, station_id: StationId) -> bool {
        self.sections.contains_station(station_id)
    }
}

/// A line that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLine {
    pub name: String,
    pub color: String,
    pub sections: LineTopology,
}

impl NewLine {
    /// A fresh line always starts with exactly one section.
    pub fn new(name: impl Into<String>, color: impl Into<String>, first: Section) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            sections: LineTopology::new(first),
        }
    }

    pub fn into_line(self, id: LineId) -> Line {
        Line {
            id,
            name: self.name,
            color: self.color,
            sections: self.sections,
            version: 0,
        }
    }
}
