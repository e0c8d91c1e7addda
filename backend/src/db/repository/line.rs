//! Line registry trait.
//!
//! Lines are always loaded and saved as whole aggregates: a caller loads a
//! [`Line`], mutates its topology in memory and saves it back. Concurrent
//! writers are detected through [`Line::version`].

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Line, LineId, NewLine};

/// Repository trait for line aggregates.
#[async_trait]
pub trait LineRepository: Send + Sync {
    /// Store a new line and assign it an id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If a station of the line is unknown
    async fn create_line(&self, line: NewLine) -> RepositoryResult<Line>;

    /// Load a line by id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the line doesn't exist
    async fn get_line(&self, line_id: LineId) -> RepositoryResult<Line>;

    /// List all lines ordered by id.
    async fn list_lines(&self) -> RepositoryResult<Vec<Line>>;

    /// Replace a stored line with `line`.
    ///
    /// The save succeeds only if the stored version equals `line.version`.
    /// On success the stored copy gets the next version, which is returned.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the line or one of its stations
    ///   was deleted meanwhile
    /// * `Err(RepositoryError::TransactionError)` - If another save won the race
    async fn save_line(&self, line: &Line) -> RepositoryResult<Line>;

    /// Delete a line together with all of its sections.
    async fn delete_line(&self, line_id: LineId) -> RepositoryResult<()>;
}
