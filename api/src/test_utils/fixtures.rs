//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::analytics::{MentorFacts, ParticipantFacts, RevenuePoint};
use crate::domain::entities::{
    EntityStatus, LogbookEntry, LogbookId, MeetingType, MentorId, MentorSummary,
    MonthlyReportEntry, MonthlyReportId, ParticipantDetail, ParticipantId, ParticipantSummary,
    ReportPeriod, University, UniversityId, UniversityRef, VisitLog, VisitType,
};

/// Create an active university list row
pub fn test_university(name: &str) -> University {
    University {
        id: UniversityId(Uuid::new_v4()),
        name: name.to_string(),
        alamat: None,
        city: Some("Bandung".to_string()),
        province: Some("Jawa Barat".to_string()),
        status: EntityStatus::ACTIVE.to_string(),
        photo: None,
    }
}

/// Create a university reference with the given status literal
pub fn test_university_ref(name: &str, status: &str) -> UniversityRef {
    UniversityRef {
        id: UniversityId(Uuid::new_v4()),
        name: name.to_string(),
        status: EntityStatus::from(status),
    }
}

/// Create an active participant list row
pub fn test_participant_summary(name: &str) -> ParticipantSummary {
    ParticipantSummary {
        id: ParticipantId(Uuid::new_v4()),
        id_tkm: Some(format!("TKM-{}", name.to_uppercase().replace(' ', "-"))),
        nama: Some(name.to_string()),
        nama_usaha: Some(format!("Usaha {}", name)),
        status: EntityStatus::ACTIVE.to_string(),
        kota_domisili: Some("Bandung".to_string()),
        provinsi_domisili: Some("Jawa Barat".to_string()),
        sektor_usaha: Some("Kuliner".to_string()),
        university: Some("UNPAD".to_string()),
        tanggal_daftar: Utc::now(),
        no_whatsapp: None,
        photo: None,
    }
}

/// Create a participant detail with a legacy identifier
pub fn test_participant_detail(legacy_id: &str, name: &str) -> ParticipantDetail {
    ParticipantDetail {
        id: ParticipantId(Uuid::new_v4()),
        id_tkm: Some(legacy_id.to_string()),
        nama: name.to_string(),
        status: EntityStatus::ACTIVE.to_string(),
        no_whatsapp: None,
        jenis_kelamin: None,
        foto: None,
        pendidikan_terakhir: None,
        kota_domisili: Some("Bandung".to_string()),
        provinsi_domisili: Some("Jawa Barat".to_string()),
        nama_usaha: Some(format!("Usaha {}", name)),
        sektor_usaha: None,
        produk_utama: None,
        deskripsi_usaha: None,
        university: Some("UNPAD".to_string()),
        tanggal_daftar: Utc::now(),
    }
}

/// Create a monthly report for a participant
pub fn test_monthly_report(
    participant_id: ParticipantId,
    year: i32,
    month: u32,
    revenue: Option<f64>,
) -> MonthlyReportEntry {
    MonthlyReportEntry {
        id: MonthlyReportId(Uuid::new_v4()),
        participant_id,
        id_tkm: None,
        participant_name: None,
        mentor_id: None,
        mentor_name: None,
        mentor_university: None,
        period: ReportPeriod::new(year, month),
        revenue,
        sales_volume: None,
        sales_volume_unit: None,
        marketing_area: None,
        business_condition: Some("stabil".to_string()),
        obstacle: None,
        isverified: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Create a mentor list row
pub fn test_mentor_summary(name: &str) -> MentorSummary {
    MentorSummary {
        id: MentorId(Uuid::new_v4()),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "08123456789".to_string(),
        gender: "L".to_string(),
        photo: None,
        university: None,
    }
}

/// Create a logbook row for a mentor
pub fn test_logbook(mentor_id: MentorId, date: NaiveDate) -> LogbookEntry {
    LogbookEntry {
        id: LogbookId(Uuid::new_v4()),
        mentor_id,
        mentor_name: None,
        mentor_university: None,
        participant_id: None,
        participant_name: None,
        logbook_date: date,
        meeting_type: Some(MeetingType::Individual.as_str().to_string()),
        visit_type: Some(VisitType::Local.as_str().to_string()),
        delivery_method: None,
        activity_summary: Some("Pendampingan".to_string()),
        mentoring_material: None,
        obstacle: None,
        solutions: None,
        total_expense: None,
        verified: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Create active participant facts with `(year, month, revenue)` reports
pub fn test_participant_facts(
    name: &str,
    university: Option<UniversityRef>,
    reports: &[(i32, u32, f64)],
) -> ParticipantFacts {
    ParticipantFacts {
        id: ParticipantId(Uuid::new_v4()),
        name: name.to_string(),
        business_name: format!("Usaha {}", name),
        photo: None,
        status: EntityStatus::Active,
        university,
        city: Some("Bandung".to_string()),
        active_employees: 1,
        reports: reports
            .iter()
            .map(|&(year, month, revenue)| RevenuePoint::new(year, month, Some(revenue)))
            .collect(),
    }
}

/// Create mentor facts assigned to the given participants
pub fn test_mentor_facts(
    name: &str,
    university: Option<UniversityRef>,
    participant_ids: &[ParticipantId],
) -> MentorFacts {
    MentorFacts {
        id: MentorId(Uuid::new_v4()),
        name: name.to_string(),
        photo: None,
        university,
        participant_ids: participant_ids.to_vec(),
    }
}

/// Create an individual visit of the given type
pub fn test_visit(mentor_id: MentorId, visit_type: VisitType) -> VisitLog {
    VisitLog {
        mentor_id,
        participant_id: None,
        meeting_type: MeetingType::Individual,
        visit_type,
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    }
}
