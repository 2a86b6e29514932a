//! Logbook domain entity
//!
//! A logbook row records one mentor visit. The aggregations only count
//! visits; nothing here is ever mutated.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MentorId, ParticipantId};

/// Unique identifier for a logbook entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogbookId(pub Uuid);

impl From<Uuid> for LogbookId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// How the meeting was held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingType {
    /// One mentor, one participant ("perorangan")
    Individual,
    /// Group session ("kelompok")
    Group,
    Other,
}

impl MeetingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingType::Individual => "perorangan",
            MeetingType::Group => "kelompok",
            MeetingType::Other => "other",
        }
    }
}

impl From<&str> for MeetingType {
    fn from(s: &str) -> Self {
        match s {
            "perorangan" => MeetingType::Individual,
            "kelompok" => MeetingType::Group,
            _ => MeetingType::Other,
        }
    }
}

/// Where the visit took place. Closed set; unknown values map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitType {
    /// "lokal"
    Local,
    /// "luar_kota"
    OutOfTown,
    /// "Luring"
    Offline,
    /// "Daring"
    Online,
    Other,
}

impl VisitType {
    pub const IN_PERSON: [VisitType; 3] =
        [VisitType::Local, VisitType::OutOfTown, VisitType::Offline];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::Local => "lokal",
            VisitType::OutOfTown => "luar_kota",
            VisitType::Offline => "Luring",
            VisitType::Online => "Daring",
            VisitType::Other => "other",
        }
    }

    /// Whether the mentor was physically present
    pub fn is_in_person(&self) -> bool {
        Self::IN_PERSON.contains(self)
    }
}

impl From<&str> for VisitType {
    fn from(s: &str) -> Self {
        match s {
            "lokal" => VisitType::Local,
            "luar_kota" => VisitType::OutOfTown,
            "Luring" => VisitType::Offline,
            "Daring" => VisitType::Online,
            _ => VisitType::Other,
        }
    }
}

/// The countable shape of a logbook row
#[derive(Debug, Clone, PartialEq)]
pub struct VisitLog {
    pub mentor_id: MentorId,
    pub participant_id: Option<ParticipantId>,
    pub meeting_type: MeetingType,
    pub visit_type: VisitType,
    pub date: NaiveDate,
}

impl VisitLog {
    /// An individual, in-person visit. Remote and group sessions never count.
    pub fn is_countable(&self) -> bool {
        self.meeting_type == MeetingType::Individual && self.visit_type.is_in_person()
    }
}

/// A logbook row as shown in the logbook list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogbookEntry {
    pub id: LogbookId,
    #[serde(rename = "id_pendamping")]
    pub mentor_id: MentorId,
    #[serde(rename = "pendampingName")]
    pub mentor_name: Option<String>,
    #[serde(rename = "pendampingUniversity")]
    pub mentor_university: Option<String>,
    #[serde(rename = "id_tkm")]
    pub participant_id: Option<ParticipantId>,
    #[serde(rename = "tkmName")]
    pub participant_name: Option<String>,
    pub logbook_date: NaiveDate,
    pub meeting_type: Option<String>,
    pub visit_type: Option<String>,
    pub delivery_method: Option<String>,
    pub activity_summary: Option<String>,
    pub mentoring_material: Option<String>,
    pub obstacle: Option<String>,
    pub solutions: Option<String>,
    pub total_expense: Option<f64>,
    pub verified: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
}
