//! Line and section operations.
//!
//! Every mutation follows the same explicit cycle:
//!
//! 1. resolve station ids through the station directory (unknown ids fail
//!    here, before the topology is involved)
//! 2. build the [`Section`]
//! 3. load the [`Line`] from the line registry
//! 4. apply `add_section` / `remove_section` in memory
//! 5. save the whole line back (version-checked)
//!
//! Nothing is saved when steps 1–4 fail, so a rejected change never leaves a
//! partially applied topology behind.

use log::{debug, info};
use serde::Serialize;

use super::error::ServiceResult;
use super::require_non_blank;
use crate::db::repository::FullRepository;
use crate::models::{Line, LineId, NewLine, Section, Station, StationId};

/// Input for creating a line with its first section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLine {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

/// Input for inserting a section into an existing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddSection {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

/// Read model of a line: metadata plus its stations in path order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineDetails {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<Station>,
    pub distance: i64,
}

/// Create a line from two existing stations.
pub async fn create_line<R: FullRepository + ?Sized>(
    repo: &R,
    request: CreateLine,
) -> ServiceResult<LineDetails> {
    let name = require_non_blank("name", &request.name)?;
    let color = require_non_blank("color", &request.color)?;
    let first = resolve_section(
        repo,
        request.up_station_id,
        request.down_station_id,
        request.distance,
    )
    .await?;

    let line = repo.create_line(NewLine::new(name, color, first)).await?;
    info!(
        "Created line {} ({}) {} -> {}",
        line.id, line.name, request.up_station_id, request.down_station_id
    );
    describe_line(repo, &line).await
}

pub async fn list_lines<R: FullRepository + ?Sized>(repo: &R) -> ServiceResult<Vec<LineDetails>> {
    let lines = repo.list_lines().await?;
    let mut details = Vec::with_capacity(lines.len());
    for line in &lines {
        details.push(describe_line(repo, line).await?);
    }
    Ok(details)
}

pub async fn get_line<R: FullRepository + ?Sized>(
    repo: &R,
    line_id: LineId,
) -> ServiceResult<LineDetails> {
    let line = repo.get_line(line_id).await?;
    describe_line(repo, &line).await
}

/// Rename / recolor a line.
pub async fn update_line<R: FullRepository + ?Sized>(
    repo: &R,
    line_id: LineId,
    name: &str,
    color: &str,
) -> ServiceResult<()> {
    let name = require_non_blank("name", name)?;
    let color = require_non_blank("color", color)?;

    let mut line = repo.get_line(line_id).await?;
    line.modify(name, color);
    repo.save_line(&line).await?;
    info!("Updated line {} metadata", line_id);
    Ok(())
}

pub async fn delete_line<R: FullRepository + ?Sized>(
    repo: &R,
    line_id: LineId,
) -> ServiceResult<()> {
    repo.delete_line(line_id).await?;
    info!("Deleted line {}", line_id);
    Ok(())
}

/// Insert a section into a line, appending or splitting as needed.
pub async fn add_section<R: FullRepository + ?Sized>(
    repo: &R,
    line_id: LineId,
    request: AddSection,
) -> ServiceResult<LineDetails> {
    let section = resolve_section(
        repo,
        request.up_station_id,
        request.down_station_id,
        request.distance,
    )
    .await?;

    let mut line = repo.get_line(line_id).await?;
    line.add_section(section)?;
    let saved = repo.save_line(&line).await?;

    info!(
        "Added section {} -> {} ({}) to line {}",
        request.up_station_id, request.down_station_id, request.distance, line_id
    );
    describe_line(repo, &saved).await
}

/// Remove the section at a terminal station of a line.
pub async fn remove_section<R: FullRepository + ?Sized>(
    repo: &R,
    line_id: LineId,
    station_id: StationId,
) -> ServiceResult<()> {
    let mut line = repo.get_line(line_id).await?;
    let removed = line.remove_section(station_id)?;
    repo.save_line(&line).await?;

    info!(
        "Removed section {} -> {} from line {}",
        removed.up_station_id(),
        removed.down_station_id(),
        line_id
    );
    Ok(())
}

/// Sections of a line in path order.
pub async fn line_sections<R: FullRepository + ?Sized>(
    repo: &R,
    line_id: LineId,
) -> ServiceResult<Vec<Section>> {
    let line = repo.get_line(line_id).await?;
    Ok(line.sections.ordered_sections().into_iter().cloned().collect())
}

/// Resolve the stations of a line into its read model.
pub async fn describe_line<R: FullRepository + ?Sized>(
    repo: &R,
    line: &Line,
) -> ServiceResult<LineDetails> {
    let station_ids = line.ordered_stations();
    let mut stations = Vec::with_capacity(station_ids.len());
    for station_id in station_ids {
        stations.push(repo.get_station(station_id).await?);
    }

    Ok(LineDetails {
        id: line.id,
        name: line.name.clone(),
        color: line.color.clone(),
        stations,
        distance: line.sections.total_distance(),
    })
}

async fn resolve_section<R: FullRepository + ?Sized>(
    repo: &R,
    up_station_id: StationId,
    down_station_id: StationId,
    distance: i64,
) -> ServiceResult<Section> {
    let up = repo.get_station(up_station_id).await?;
    let down = repo.get_station(down_station_id).await?;
    debug!("Resolved section stations {} -> {}", up.name, down.name);
    Ok(Section::new(up.id, down.id, distance)?)
}
