pub mod error;
pub mod line;
pub mod macros;
pub mod section;
pub mod station;
pub mod topology;

pub use error::{TopologyError, TopologyResult};
pub use line::{Line, LineId, NewLine};
pub use section::Section;
pub use station::{Station, StationId};
pub use topology::LineTopology;
