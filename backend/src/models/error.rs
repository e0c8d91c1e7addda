//! Error taxonomy for the line topology engine.
//!
//! Every variant describes a caller input problem. None of them are transient,
//! so nothing here is ever retried. The HTTP layer switches on the variant (or
//! on [`TopologyError::code`]) to pick a response, never on the message text.

use super::station::StationId;

/// Result type for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Reasons a section insertion or removal was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// Malformed section input (equal endpoints, non-positive distance).
    #[error("Invalid section: {reason}")]
    InvalidSection { reason: String },

    /// The new section shares no station with the current path.
    #[error("Section {up_station_id} -> {down_station_id} does not touch any station on the line")]
    NoDockingPoint {
        up_station_id: StationId,
        down_station_id: StationId,
    },

    /// Both stations are already on the path but not as an existing section.
    #[error("Station {station_id} is already registered on the line")]
    AlreadyRegisteredStation { station_id: StationId },

    /// The exact section already exists on the line.
    #[error("Section {up_station_id} -> {down_station_id} already exists on the line")]
    DuplicateSection {
        up_station_id: StationId,
        down_station_id: StationId,
    },

    /// A split would leave a residual section with zero or negative distance,
    /// or an extension would overflow the line's total distance.
    #[error("Distance {requested} exceeds the available distance ({available})")]
    DistanceTooLong { requested: i64, available: i64 },

    /// The line must keep at least one section.
    #[error("A line must keep at least one section")]
    BelowMinSectionSize,

    /// Only the first or last station of a line can be removed.
    #[error("Station {station_id} is not a terminal station of the line")]
    NotTerminalStation { station_id: StationId },
}

impl TopologyError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSection { .. } => "INVALID_SECTION",
            Self::NoDockingPoint { .. } => "NOT_FOUND_SECTION_DOCKING_POINT",
            Self::AlreadyRegisteredStation { .. } => "ALREADY_REGISTERED_STATION_IN_SECTION",
            Self::DuplicateSection { .. } => "DUPLICATE_SECTION",
            Self::DistanceTooLong { .. } => "DISTANCE_TOO_LONG",
            Self::BelowMinSectionSize => "BELOW_MIN_SECTION_SIZE",
            Self::NotTerminalStation { .. } => "NOT_TERMINAL_STATION",
        }
    }

    pub(crate) fn invalid_section(reason: impl Into<String>) -> Self {
        Self::InvalidSection {
            reason: reason.into(),
        }
    }
}
