//! Monthly report domain entity
//!
//! One report per participant per `(year, month)`. Append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MentorId, ParticipantId};

/// Unique identifier for a monthly report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthlyReportId(pub Uuid);

impl From<Uuid> for MonthlyReportId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Reporting period; orders by year then month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub year: i32,
    pub month: u32,
}

impl ReportPeriod {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A monthly report row ("capaian output")
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReportEntry {
    pub id: MonthlyReportId,
    pub participant_id: ParticipantId,
    pub id_tkm: Option<String>,
    #[serde(rename = "tkmName")]
    pub participant_name: Option<String>,
    #[serde(rename = "id_pendamping")]
    pub mentor_id: Option<MentorId>,
    #[serde(rename = "pendampingName")]
    pub mentor_name: Option<String>,
    #[serde(rename = "pendampingUniversity")]
    pub mentor_university: Option<String>,
    pub period: ReportPeriod,
    pub revenue: Option<f64>,
    pub sales_volume: Option<f64>,
    pub sales_volume_unit: Option<String>,
    pub marketing_area: Option<String>,
    pub business_condition: Option<String>,
    pub obstacle: Option<String>,
    pub isverified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
