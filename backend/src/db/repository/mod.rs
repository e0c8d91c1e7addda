//! Repository trait definitions.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`station`]: Station directory (resolve / create / delete stations)
//! - [`line`]: Line registry (load / save whole line aggregates)
//!
//! # Convenience Trait Bound
//!
//! Services that need both capabilities take a [`FullRepository`]:
//!
//! ```ignore
//! async fn add_section<R: FullRepository + ?Sized>(repo: &R, line_id: LineId) -> Result<()> {
//!     let up = repo.get_station(up_id).await?;
//!     let mut line = repo.get_line(line_id).await?;
//!     // mutate line.sections ...
//!     repo.save_line(&line).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod line;
pub mod station;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use line::LineRepository;
pub use station::StationRepository;

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: StationRepository + LineRepository {}

// Blanket implementation: anything implementing both traits is a FullRepository
impl<T> FullRepository for T where T: StationRepository + LineRepository {}
