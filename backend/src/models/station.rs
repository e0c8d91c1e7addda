//! Station entity owned by the station directory.

use serde::{Deserialize, Serialize};

crate::define_id_type!(i64, StationId);

/// A named station. Lines only hold [`StationId`]s, never the station itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
