//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};

use super::dto::{
    CreateLineRequest, CreateStationRequest, HealthResponse, LineResponse, RemoveSectionQuery,
    SectionRequest, SectionResponse, StationResponse, UpdateLineRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{LineId, StationId};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Result type for handlers answering `201 Created` with a `Location` header.
pub type CreatedResult<T> = Result<Created<T>, AppError>;

/// `201 Created` response parts: status, `Location` header and JSON body.
pub type Created<T> = (StatusCode, [(header::HeaderName, String); 1], Json<T>);

fn created<T>(location: String, body: T) -> Created<T> {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Stations
// =============================================================================

/// POST /stations
pub async fn create_station(
    State(state): State<AppState>,
    Json(request): Json<CreateStationRequest>,
) -> CreatedResult<StationResponse> {
    let station = services::create_station(state.repository.as_ref(), &request.name).await?;
    Ok(created(
        format!("/stations/{}", station.id),
        StationResponse::from(station),
    ))
}

/// GET /stations
pub async fn list_stations(State(state): State<AppState>) -> HandlerResult<Vec<StationResponse>> {
    let stations = services::list_stations(state.repository.as_ref()).await?;
    Ok(Json(stations.into_iter().map(Into::into).collect()))
}

/// DELETE /stations/{station_id}
pub async fn delete_station(
    State(state): State<AppState>,
    Path(station_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    services::delete_station(state.repository.as_ref(), StationId::new(station_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Lines
// =============================================================================

/// POST /lines
pub async fn create_line(
    State(state): State<AppState>,
    Json(request): Json<CreateLineRequest>,
) -> CreatedResult<LineResponse> {
    let line = services::create_line(state.repository.as_ref(), request.into()).await?;
    Ok(created(format!("/lines/{}", line.id), LineResponse::from(line)))
}

/// GET /lines
pub async fn list_lines(State(state): State<AppState>) -> HandlerResult<Vec<LineResponse>> {
    let lines = services::list_lines(state.repository.as_ref()).await?;
    Ok(Json(lines.into_iter().map(Into::into).collect()))
}

/// GET /lines/{line_id}
pub async fn get_line(
    State(state): State<AppState>,
    Path(line_id): Path<i64>,
) -> HandlerResult<LineResponse> {
    let line = services::get_line(state.repository.as_ref(), LineId::new(line_id)).await?;
    Ok(Json(line.into()))
}

/// PUT /lines/{line_id}
pub async fn update_line(
    State(state): State<AppState>,
    Path(line_id): Path<i64>,
    Json(request): Json<UpdateLineRequest>,
) -> Result<StatusCode, AppError> {
    services::update_line(
        state.repository.as_ref(),
        LineId::new(line_id),
        &request.name,
        &request.color,
    )
    .await?;
    Ok(StatusCode::OK)
}

/// DELETE /lines/{line_id}
pub async fn delete_line(
    State(state): State<AppState>,
    Path(line_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    services::delete_line(state.repository.as_ref(), LineId::new(line_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Sections
// =============================================================================

/// POST /lines/{line_id}/sections
///
/// The `Location` header points at the removal URL of the new section's down
/// station, so a client can undo an append with a single DELETE.
pub async fn add_section(
    State(state): State<AppState>,
    Path(line_id): Path<i64>,
    Json(request): Json<SectionRequest>,
) -> CreatedResult<LineResponse> {
    let down_station_id = request.down_station_id;
    let line = services::add_section(
        state.repository.as_ref(),
        LineId::new(line_id),
        request.into(),
    )
    .await?;
    Ok(created(
        format!("/lines/{}/sections?stationId={}", line_id, down_station_id),
        LineResponse::from(line),
    ))
}

/// GET /lines/{line_id}/sections
pub async fn list_sections(
    State(state): State<AppState>,
    Path(line_id): Path<i64>,
) -> HandlerResult<Vec<SectionResponse>> {
    let sections = services::line_sections(state.repository.as_ref(), LineId::new(line_id)).await?;
    Ok(Json(sections.into_iter().map(Into::into).collect()))
}

/// DELETE /lines/{line_id}/sections?stationId={station_id}
pub async fn remove_section(
    State(state): State<AppState>,
    Path(line_id): Path<i64>,
    Query(query): Query<RemoveSectionQuery>,
) -> Result<StatusCode, AppError> {
    services::remove_section(
        state.repository.as_ref(),
        LineId::new(line_id),
        query.station_id,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
