//! Repository factory for dependency injection.
//!
//! This module creates repository instances from the `[repository]` table of
//! the config file (`REPOSITORY_TYPE` overrides it, see [`crate::config`]).

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::config::RepositorySettings;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryType {
    /// In-memory local repository
    #[default]
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "memory", "in-memory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" | "in-memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use subway_rust::db::{RepositoryFactory, RepositoryType};
///
/// let repo = RepositoryFactory::create(RepositoryType::Local).unwrap();
/// # let _ = repo;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    pub fn create(repo_type: RepositoryType) -> RepositoryResult<Arc<dyn FullRepository>> {
        match repo_type {
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from the `[repository]` settings of the config file.
    pub fn from_settings(
        settings: &RepositorySettings,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = settings.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        Self::create(repo_type)
    }
}
