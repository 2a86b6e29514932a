//! Fact sets consumed by the aggregations
//!
//! Flattened, read-only snapshots assembled by the analytics adapter. Each
//! participant carries its full revenue series so growth is computed here,
//! not in SQL.

use crate::domain::entities::{EntityStatus, MentorId, ParticipantId, UniversityRef};

use super::growth::{Growth, RevenuePoint};

/// Everything the dashboard needs to know about one participant
#[derive(Debug, Clone)]
pub struct ParticipantFacts {
    pub id: ParticipantId,
    pub name: String,
    pub business_name: String,
    pub photo: Option<String>,
    pub status: EntityStatus,
    /// Owning university, resolved directly or through the profile
    pub university: Option<UniversityRef>,
    /// Domicile city (regency) used for map grouping
    pub city: Option<String>,
    /// Currently active employees of the participant's business
    pub active_employees: u64,
    pub reports: Vec<RevenuePoint>,
}

impl ParticipantFacts {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Active participant whose owning university is active too.
    /// This is the gate for every dashboard-level count.
    pub fn is_counted(&self) -> bool {
        self.is_active() && self.university.as_ref().is_some_and(|u| u.is_active())
    }

    pub fn growth(&self) -> Growth {
        Growth::compute(&self.reports)
    }
}

/// A mentor with its university link and active assignments
#[derive(Debug, Clone)]
pub struct MentorFacts {
    pub id: MentorId,
    pub name: String,
    pub photo: Option<String>,
    pub university: Option<UniversityRef>,
    pub participant_ids: Vec<ParticipantId>,
}

impl MentorFacts {
    pub fn has_active_university(&self) -> bool {
        self.university.as_ref().is_some_and(|u| u.is_active())
    }
}
