//! Door ID generation and management

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a door opening.
/// Uses UUID v4 for stable IDs that survive serialization; copy and mirror
/// operations always assign fresh IDs to the duplicated doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorId(Uuid);

impl DoorId {
    /// Create a new random DoorId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a DoorId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Create a DoorId from a string representation
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for DoorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DoorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for DoorId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<DoorId> for Uuid {
    fn from(id: DoorId) -> Self {
        id.0
    }
}
