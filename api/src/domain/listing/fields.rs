//! Per-entity sort and filter allowlists
//!
//! Each entity exposes a fixed set of logical names. Several accept the
//! Indonesian field names the dashboard front-end already sends.

use super::query::{Allowlist, ListQuery, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParticipantSort {
    RegisteredAt,
    Name,
    Business,
    Status,
    City,
    Province,
}

impl Allowlist for ParticipantSort {
    const ENTRIES: &'static [(&'static str, Self)] = &[
        ("registeredAt", Self::RegisteredAt),
        ("tanggal_daftar", Self::RegisteredAt),
        ("name", Self::Name),
        ("nama", Self::Name),
        ("business", Self::Business),
        ("nama_usaha", Self::Business),
        ("status", Self::Status),
        ("city", Self::City),
        ("kota_domisili", Self::City),
        ("province", Self::Province),
        ("provinsi_domisili", Self::Province),
    ];
}

impl SortKey for ParticipantSort {
    const DEFAULT: Self = Self::RegisteredAt;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParticipantFilter {
    Status,
    Province,
    City,
    University,
}

impl Allowlist for ParticipantFilter {
    const ENTRIES: &'static [(&'static str, Self)] = &[
        ("status", Self::Status),
        ("province", Self::Province),
        ("provinsi", Self::Province),
        ("city", Self::City),
        ("kota", Self::City),
        ("university", Self::University),
        ("universityId", Self::University),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MentorSort {
    Name,
    Email,
    University,
}

impl Allowlist for MentorSort {
    const ENTRIES: &'static [(&'static str, Self)] = &[
        ("name", Self::Name),
        ("nama", Self::Name),
        ("email", Self::Email),
        ("university", Self::University),
    ];
}

impl SortKey for MentorSort {
    const DEFAULT: Self = Self::Name;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MentorFilter {
    University,
}

impl Allowlist for MentorFilter {
    const ENTRIES: &'static [(&'static str, Self)] = &[
        ("university", Self::University),
        ("universityId", Self::University),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UniversitySort {
    Name,
    City,
    Province,
    Status,
}

impl Allowlist for UniversitySort {
    const ENTRIES: &'static [(&'static str, Self)] = &[
        ("name", Self::Name),
        ("city", Self::City),
        ("province", Self::Province),
        ("status", Self::Status),
    ];
}

impl SortKey for UniversitySort {
    const DEFAULT: Self = Self::Name;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UniversityFilter {
    Status,
    City,
    Province,
}

impl Allowlist for UniversityFilter {
    const ENTRIES: &'static [(&'static str, Self)] = &[
        ("status", Self::Status),
        ("city", Self::City),
        ("province", Self::Province),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogbookSort {
    LogbookDate,
    Verified,
    Mentor,
    Participant,
    UpdatedAt,
}

impl Allowlist for LogbookSort {
    const ENTRIES: &'static [(&'static str, Self)] = &[
        ("logbookDate", Self::LogbookDate),
        ("logbook_date", Self::LogbookDate),
        ("verified", Self::Verified),
        ("pendamping", Self::Mentor),
        ("mentor", Self::Mentor),
        ("id_tkm", Self::Participant),
        ("participant", Self::Participant),
        ("updatedAt", Self::UpdatedAt),
        ("updated_at", Self::UpdatedAt),
    ];
}

impl SortKey for LogbookSort {
    const DEFAULT: Self = Self::LogbookDate;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogbookFilter {
    Verified,
    Date,
    MeetingType,
    VisitType,
    Mentor,
}

impl Allowlist for LogbookFilter {
    const ENTRIES: &'static [(&'static str, Self)] = &[
        ("verified", Self::Verified),
        ("date", Self::Date),
        ("meetingType", Self::MeetingType),
        ("visitType", Self::VisitType),
        ("mentor", Self::Mentor),
        ("id_pendamping", Self::Mentor),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputSort {
    Period,
    Verified,
    Condition,
    Revenue,
    Mentor,
    Participant,
    UpdatedAt,
}

impl Allowlist for OutputSort {
    const ENTRIES: &'static [(&'static str, Self)] = &[
        ("period", Self::Period),
        ("verified", Self::Verified),
        ("isverified", Self::Verified),
        ("condition", Self::Condition),
        ("revenue", Self::Revenue),
        ("pendamping", Self::Mentor),
        ("mentor", Self::Mentor),
        ("id_tkm", Self::Participant),
        ("participant", Self::Participant),
        ("updatedAt", Self::UpdatedAt),
        ("updated_at", Self::UpdatedAt),
    ];
}

impl SortKey for OutputSort {
    const DEFAULT: Self = Self::Period;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputFilter {
    Condition,
    Verified,
    Date,
    Year,
    Month,
}

impl Allowlist for OutputFilter {
    const ENTRIES: &'static [(&'static str, Self)] = &[
        ("condition", Self::Condition),
        ("verified", Self::Verified),
        ("isverified", Self::Verified),
        ("date", Self::Date),
        ("year", Self::Year),
        ("month", Self::Month),
    ];
}

pub type ParticipantQuery = ListQuery<ParticipantSort, ParticipantFilter>;
pub type MentorQuery = ListQuery<MentorSort, MentorFilter>;
pub type UniversityQuery = ListQuery<UniversitySort, UniversityFilter>;
pub type LogbookQuery = ListQuery<LogbookSort, LogbookFilter>;
pub type OutputQuery = ListQuery<OutputSort, OutputFilter>;
