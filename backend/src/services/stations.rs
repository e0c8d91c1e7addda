//! Station directory operations.

use log::{info, warn};

use super::error::ServiceResult;
use super::require_non_blank;
use crate::db::repository::{FullRepository, RepositoryError};
use crate::models::{Station, StationId};

/// Register a new station.
pub async fn create_station<R: FullRepository + ?Sized>(
    repo: &R,
    name: &str,
) -> ServiceResult<Station> {
    let name = require_non_blank("name", name)?;
    let station = repo.create_station(name).await?;
    info!("Created station {} ({})", station.id, station.name);
    Ok(station)
}

pub async fn list_stations<R: FullRepository + ?Sized>(repo: &R) -> ServiceResult<Vec<Station>> {
    Ok(repo.list_stations().await?)
}

/// Resolve a station id, failing with not-found for unknown ids.
pub async fn get_station<R: FullRepository + ?Sized>(
    repo: &R,
    station_id: StationId,
) -> ServiceResult<Station> {
    Ok(repo.get_station(station_id).await?)
}

/// Delete a station that no line runs through.
///
/// A station still on a line's path is refused with a validation error, since
/// removing it would leave that line pointing at an unknown station.
pub async fn delete_station<R: FullRepository + ?Sized>(
    repo: &R,
    station_id: StationId,
) -> ServiceResult<()> {
    if let Err(e) = repo.delete_station(station_id).await {
        if matches!(e, RepositoryError::ValidationError { .. }) {
            warn!("Refusing to delete station {}: {}", station_id, e);
        }
        return Err(e.into());
    }
    info!("Deleted station {}", station_id);
    Ok(())
}
