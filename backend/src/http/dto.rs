//! Data Transfer Objects for the HTTP API.
//!
//! Field names are camelCase on the wire (`upStationId`, `downStationId`).

use serde::{Deserialize, Serialize};

use crate::models::{LineId, Section, Station, StationId};
use crate::services::{AddSection, CreateLine, LineDetails};

/// Request body for `POST /stations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStationRequest {
    pub name: String,
}

/// Station summary used in station listings and line responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
        }
    }
}

/// Request body for `POST /lines`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

impl From<CreateLineRequest> for CreateLine {
    fn from(request: CreateLineRequest) -> Self {
        Self {
            name: request.name,
            color: request.color,
            up_station_id: request.up_station_id,
            down_station_id: request.down_station_id,
            distance: request.distance,
        }
    }
}

/// Request body for `PUT /lines/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLineRequest {
    pub name: String,
    pub color: String,
}

/// Request body for `POST /lines/{id}/sections`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

impl From<SectionRequest> for AddSection {
    fn from(request: SectionRequest) -> Self {
        Self {
            up_station_id: request.up_station_id,
            down_station_id: request.down_station_id,
            distance: request.distance,
        }
    }
}

/// Query string of `DELETE /lines/{id}/sections?stationId=..`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSectionQuery {
    pub station_id: StationId,
}

/// Line with its stations in path order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
    /// Sum of all section distances
    pub distance: i64,
}

impl From<LineDetails> for LineResponse {
    fn from(details: LineDetails) -> Self {
        Self {
            id: details.id,
            name: details.name,
            color: details.color,
            stations: details.stations.into_iter().map(Into::into).collect(),
            distance: details.distance,
        }
    }
}

/// One section of a line, as returned by `GET /lines/{id}/sections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

impl From<Section> for SectionResponse {
    fn from(section: Section) -> Self {
        Self {
            up_station_id: section.up_station_id(),
            down_station_id: section.down_station_id(),
            distance: section.distance(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connection status
    pub database: String,
}
