//! Station directory trait.
//!
//! The topology engine only ever resolves stations through this trait; it
//! never creates or changes them.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Station, StationId};

/// Repository trait for station storage and lookup.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Check if the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a new station and assign it an id.
    async fn create_station(&self, name: &str) -> RepositoryResult<Station>;

    /// Resolve a station by id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no station has that id
    async fn get_station(&self, station_id: StationId) -> RepositoryResult<Station>;

    /// List all stations ordered by id.
    async fn list_stations(&self) -> RepositoryResult<Vec<Station>>;

    /// Delete a station that no stored line runs through.
    ///
    /// The in-use check and the removal are one atomic step with respect to
    /// line saves.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no station has that id
    /// * `Err(RepositoryError::ValidationError)` - If a line still uses it
    async fn delete_station(&self, station_id: StationId) -> RepositoryResult<()>;
}
