//! Error type returned by the service layer.

use crate::db::repository::RepositoryError;
use crate::models::TopologyError;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Everything a service call can fail with.
///
/// The variants stay structured all the way to the HTTP layer, which picks a
/// status code from the variant alone.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Storage failure, including unknown line or station ids.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The requested section change would break the line topology.
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// Malformed request fields (blank names, ...).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(e) if e.is_not_found())
    }
}
