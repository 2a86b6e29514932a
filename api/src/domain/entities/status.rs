//! Lifecycle status shared by participants, universities and assignments
//!
//! Records are never hard-deleted; the status column is the inclusion gate
//! for every "active" aggregate.

use serde::{Deserialize, Serialize};

/// Status stored as free text; anything other than `active` is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    Active,
    Inactive,
}

impl EntityStatus {
    /// The literal stored for active rows.
    pub const ACTIVE: &'static str = "active";

    pub fn is_active(&self) -> bool {
        matches!(self, EntityStatus::Active)
    }
}

impl std::fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityStatus::Active => write!(f, "active"),
            EntityStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl From<&str> for EntityStatus {
    fn from(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case(Self::ACTIVE) {
            EntityStatus::Active
        } else {
            EntityStatus::Inactive
        }
    }
}
