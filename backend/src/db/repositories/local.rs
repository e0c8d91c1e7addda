//! In-memory local repository implementation.
//!
//! Stores stations and lines in `BTreeMap`s behind a single
//! `parking_lot::RwLock`, giving fast, deterministic and isolated execution for
//! unit tests and local development. Listings come back ordered by id.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::{Line, LineId, NewLine, Station, StationId};

/// In-memory local repository.
///
/// Clones share the same underlying storage.
///
/// # Example
/// ```
/// use subway_rust::db::repositories::LocalRepository;
/// use subway_rust::db::repository::StationRepository;
///
/// # tokio_test_block_on(async {
/// let repo = LocalRepository::new();
/// let station = repo.create_station("Gangnam").await.unwrap();
/// assert_eq!(repo.get_station(station.id).await.unwrap().name, "Gangnam");
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,

    // ID counters
    next_station_id: i64,
    next_line_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            stations: BTreeMap::new(),
            lines: BTreeMap::new(),
            next_station_id: 1,
            next_line_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalData {
    /// First station on `stations` that the directory does not know.
    fn unknown_station(&self, stations: &[StationId]) -> Option<StationId> {
        stations
            .iter()
            .copied()
            .find(|id| !self.stations.contains_key(id))
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository. Id counters restart at 1.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    pub fn station_count(&self) -> usize {
        self.data.read().stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.data.read().lines.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Database is not healthy"));
        }
        Ok(())
    }

    fn station_not_found(operation: &str, station_id: StationId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Station {} not found", station_id),
            ErrorContext::new(operation)
                .with_entity("station")
                .with_entity_id(station_id),
        )
    }

    fn line_not_found(operation: &str, line_id: LineId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Line {} not found", line_id),
            ErrorContext::new(operation)
                .with_entity("line")
                .with_entity_id(line_id),
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StationRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn create_station(&self, name: &str) -> RepositoryResult<Station> {
        self.check_health()?;
        let mut data = self.data.write();
        let station_id = StationId(data.next_station_id);
        data.next_station_id += 1;

        let station = Station::new(station_id, name);
        data.stations.insert(station_id, station.clone());
        Ok(station)
    }

    async fn get_station(&self, station_id: StationId) -> RepositoryResult<Station> {
        self.check_health()?;
        self.data
            .read()
            .stations
            .get(&station_id)
            .cloned()
            .ok_or_else(|| Self::station_not_found("get_station", station_id))
    }

    async fn list_stations(&self) -> RepositoryResult<Vec<Station>> {
        self.check_health()?;
        Ok(self.data.read().stations.values().cloned().collect())
    }

    async fn delete_station(&self, station_id: StationId) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        if !data.stations.contains_key(&station_id) {
            return Err(Self::station_not_found("delete_station", station_id));
        }

        // in-use check and removal share one write lock with line saves
        let used_by: Vec<String> = data
            .lines
            .values()
            .filter(|line| line.contains_station(station_id))
            .map(|line| line.id.to_string())
            .collect();
        if !used_by.is_empty() {
            return Err(RepositoryError::validation_with_context(
                format!(
                    "Station {} is still used by line(s) {}",
                    station_id,
                    used_by.join(", ")
                ),
                ErrorContext::new("delete_station")
                    .with_entity("station")
                    .with_entity_id(station_id),
            ));
        }

        data.stations.remove(&station_id);
        Ok(())
    }
}

#[async_trait]
impl LineRepository for LocalRepository {
    async fn create_line(&self, line: NewLine) -> RepositoryResult<Line> {
        self.check_health()?;
        let mut data = self.data.write();
        if let Some(missing) = data.unknown_station(&line.sections.ordered_stations()) {
            return Err(Self::station_not_found("create_line", missing));
        }
        let line_id = LineId(data.next_line_id);
        data.next_line_id += 1;

        let line = line.into_line(line_id);
        data.lines.insert(line_id, line.clone());
        Ok(line)
    }

    async fn get_line(&self, line_id: LineId) -> RepositoryResult<Line> {
        self.check_health()?;
        self.data
            .read()
            .lines
            .get(&line_id)
            .cloned()
            .ok_or_else(|| Self::line_not_found("get_line", line_id))
    }

    async fn list_lines(&self) -> RepositoryResult<Vec<Line>> {
        self.check_health()?;
        Ok(self.data.read().lines.values().cloned().collect())
    }

    async fn save_line(&self, line: &Line) -> RepositoryResult<Line> {
        self.check_health()?;
        let mut data = self.data.write();
        if let Some(missing) = data.unknown_station(&line.ordered_stations()) {
            return Err(Self::station_not_found("save_line", missing));
        }
        let stored = data
            .lines
            .get_mut(&line.id)
            .ok_or_else(|| Self::line_not_found("save_line", line.id))?;

        if stored.version != line.version {
            return Err(RepositoryError::conflict_with_context(
                format!(
                    "Line {} was modified concurrently (stored version {}, saved from {})",
                    line.id, stored.version, line.version
                ),
                ErrorContext::new("save_line")
                    .with_entity("line")
                    .with_entity_id(line.id)
                    .retryable(),
            ));
        }

        let mut saved = line.clone();
        saved.version += 1;
        *stored = saved.clone();
        Ok(saved)
    }

    async fn delete_line(&self, line_id: LineId) -> RepositoryResult<()> {
        self.check_health()?;
        self.data
            .write()
            .lines
            .remove(&line_id)
            .map(|_| ())
            .ok_or_else(|| Self::line_not_found("delete_line", line_id))
    }
}
