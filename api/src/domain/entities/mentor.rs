//! Mentor domain entity
//!
//! A mentor is a user whose profile may point at a university. Mentors are
//! linked to participants through assignment rows.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UniversityBrief;

/// Unique identifier for a mentor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MentorId(pub Uuid);

impl From<Uuid> for MentorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MentorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A mentor row as shown in the mentor list
#[derive(Debug, Clone, Serialize)]
pub struct MentorSummary {
    pub id: MentorId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub photo: Option<String>,
    pub university: Option<UniversityBrief>,
}
