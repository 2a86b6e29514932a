//! University domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EntityStatus;

/// Unique identifier for a university
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UniversityId(pub Uuid);

impl From<Uuid> for UniversityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UniversityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A university row as shown in the university list
#[derive(Debug, Clone, Serialize)]
pub struct University {
    pub id: UniversityId,
    pub name: String,
    pub alamat: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub status: String,
    pub photo: Option<String>,
}

/// Short university reference embedded in mentor rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniversityBrief {
    pub id: UniversityId,
    pub name: String,
    pub city: Option<String>,
    pub province: Option<String>,
}

/// University identity plus its status gate, used by the aggregations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniversityRef {
    pub id: UniversityId,
    pub name: String,
    pub status: EntityStatus,
}

impl UniversityRef {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
