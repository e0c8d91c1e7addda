//! Service layer for business logic and orchestration.
//!
//! Services are repository-agnostic: they take any [`FullRepository`]
//! (`&LocalRepository`, `&dyn FullRepository`, ...) and perform explicit
//! load / mutate / save cycles around the line topology.
//!
//! ```no_run
//! use subway_rust::db::LocalRepository;
//! use subway_rust::services::{self, CreateLine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let a = services::create_station(&repo, "Gangnam").await?;
//!     let b = services::create_station(&repo, "Yeoksam").await?;
//!     let line = services::create_line(
//!         &repo,
//!         CreateLine {
//!             name: "Line 2".into(),
//!             color: "bg-green-600".into(),
//!             up_station_id: a.id,
//!             down_station_id: b.id,
//!             distance: 10,
//!         },
//!     )
//!     .await?;
//!     println!("{} has {} stations", line.name, line.stations.len());
//!     Ok(())
//! }
//! ```
//!
//! [`FullRepository`]: crate::db::FullRepository

pub mod error;
pub mod lines;
pub mod stations;

pub use error::{ServiceError, ServiceResult};
pub use lines::{
    add_section, create_line, delete_line, describe_line, get_line, line_sections, list_lines,
    remove_section, update_line, AddSection, CreateLine, LineDetails,
};
pub use stations::{create_station, delete_station, get_station, list_stations};

use crate::db::repository::FullRepository;

/// Check if the repository is reachable.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> ServiceResult<bool> {
    Ok(repo.health_check().await?)
}

fn require_non_blank<'a>(field: &str, value: &'a str) -> ServiceResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidRequest(format!(
            "{} must not be blank",
            field
        )));
    }
    Ok(trimmed)
}
