//! Participant domain entity
//!
//! A participant is an enrolled business owner. Status transitions over the
//! program lifetime; rows are never hard-deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MonthlyReportEntry;
use crate::domain::analytics::Growth;

/// Unique identifier for a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl From<Uuid> for ParticipantId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant row as shown in the participant list
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantSummary {
    pub id: ParticipantId,
    pub id_tkm: Option<String>,
    pub nama: Option<String>,
    pub nama_usaha: Option<String>,
    pub status: String,
    pub kota_domisili: Option<String>,
    pub provinsi_domisili: Option<String>,
    pub sektor_usaha: Option<String>,
    pub university: Option<String>,
    pub tanggal_daftar: DateTime<Utc>,
    pub no_whatsapp: Option<String>,
    pub photo: Option<String>,
}

/// Full participant record for the detail page
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantDetail {
    pub id: ParticipantId,
    pub id_tkm: Option<String>,
    pub nama: String,
    pub status: String,
    pub no_whatsapp: Option<String>,
    pub jenis_kelamin: Option<String>,
    pub foto: Option<String>,
    pub pendidikan_terakhir: Option<String>,
    pub kota_domisili: Option<String>,
    pub provinsi_domisili: Option<String>,
    pub nama_usaha: Option<String>,
    pub sektor_usaha: Option<String>,
    pub produk_utama: Option<String>,
    pub deskripsi_usaha: Option<String>,
    pub university: Option<String>,
    pub tanggal_daftar: DateTime<Utc>,
}

/// Distinct values available for the participant list filters
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParticipantFilterOptions {
    pub statuses: Vec<String>,
    pub provinces: Vec<String>,
    pub cities: Vec<String>,
}

/// Summary block returned with a participant's monthly reports
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputsSummary {
    pub total_months_reported: usize,
    pub average_revenue: f64,
    pub total_new_employees: u64,
    pub growth: Growth,
}

/// A participant's monthly reports plus their summary
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantOutputs {
    pub outputs: Vec<MonthlyReportEntry>,
    pub summary: OutputsSummary,
}
