//! In-memory implementations of port traits
//!
//! These store data in memory and can be configured to fail or stall so
//! services and handlers can be tested without a database.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::analytics::{MentorFacts, ParticipantFacts};
use crate::domain::entities::{
    LogbookEntry, MentorSummary, MonthlyReportEntry, ParticipantDetail, ParticipantFilterOptions,
    ParticipantId, ParticipantSummary, University, VisitLog,
};
use crate::domain::listing::{
    LogbookQuery, MentorQuery, OutputQuery, Pagination, ParticipantFilter, ParticipantQuery,
    UniversityQuery,
};
use crate::domain::ports::{
    AnalyticsRepository, LogbookRepository, MentorRepository, MonthlyReportRepository,
    ParticipantRepository, UniversityRepository,
};
use crate::error::DomainError;

fn paged<T: Clone>(rows: &[T], pagination: &Pagination) -> (Vec<T>, u64) {
    let page = rows
        .iter()
        .skip(pagination.offset() as usize)
        .take(pagination.limit() as usize)
        .cloned()
        .collect();
    (page, rows.len() as u64)
}

fn mock_failure() -> DomainError {
    DomainError::Database("Mock failure".to_string())
}

// ============================================================================
// In-Memory Participant Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryParticipantRepository {
    summaries: Arc<RwLock<Vec<ParticipantSummary>>>,
    details: Arc<RwLock<HashMap<String, ParticipantDetail>>>,
    employees: Arc<RwLock<HashMap<ParticipantId, u64>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl InMemoryParticipantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(self, summary: ParticipantSummary) -> Self {
        self.summaries.write().unwrap().push(summary);
        self
    }

    pub fn with_detail(self, detail: ParticipantDetail) -> Self {
        if let Some(legacy_id) = detail.id_tkm.clone() {
            self.details.write().unwrap().insert(legacy_id, detail);
        }
        self
    }

    pub fn with_active_employees(self, id: ParticipantId, count: u64) -> Self {
        self.employees.write().unwrap().insert(id, count);
        self
    }

    pub fn failing(self) -> Self {
        *self.should_fail.write().unwrap() = true;
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(mock_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn list(
        &self,
        query: &ParticipantQuery,
    ) -> Result<(Vec<ParticipantSummary>, u64), DomainError> {
        self.check()?;

        let needle = query.search.as_deref().map(str::to_lowercase);
        let status = query.filter(ParticipantFilter::Status);

        let rows: Vec<ParticipantSummary> = self
            .summaries
            .read()
            .unwrap()
            .iter()
            .filter(|p| status.map_or(true, |s| p.status == s))
            .filter(|p| match &needle {
                Some(needle) => p
                    .nama
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(needle)),
                None => true,
            })
            .cloned()
            .collect();

        Ok(paged(&rows, &query.pagination))
    }

    async fn find_by_legacy_id(
        &self,
        legacy_id: &str,
    ) -> Result<Option<ParticipantDetail>, DomainError> {
        self.check()?;
        Ok(self.details.read().unwrap().get(legacy_id).cloned())
    }

    async fn filter_options(&self) -> Result<ParticipantFilterOptions, DomainError> {
        self.check()?;

        let summaries = self.summaries.read().unwrap();
        let distinct = |values: Vec<Option<String>>| {
            let mut values: Vec<String> = values
                .into_iter()
                .flatten()
                .filter(|v| !v.trim().is_empty())
                .collect::<HashSet<_>>()
                .into_iter()
                .collect();
            values.sort();
            values
        };

        Ok(ParticipantFilterOptions {
            statuses: distinct(summaries.iter().map(|p| Some(p.status.clone())).collect()),
            provinces: distinct(summaries.iter().map(|p| p.provinsi_domisili.clone()).collect()),
            cities: distinct(summaries.iter().map(|p| p.kota_domisili.clone()).collect()),
        })
    }

    async fn active_employee_count(&self, id: &ParticipantId) -> Result<u64, DomainError> {
        self.check()?;
        Ok(self.employees.read().unwrap().get(id).copied().unwrap_or(0))
    }
}

// ============================================================================
// In-Memory Mentor, University and Logbook Repositories
// ============================================================================

#[derive(Default)]
pub struct InMemoryMentorRepository {
    mentors: Arc<RwLock<Vec<MentorSummary>>>,
}

impl InMemoryMentorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mentor(self, mentor: MentorSummary) -> Self {
        self.mentors.write().unwrap().push(mentor);
        self
    }
}

#[async_trait]
impl MentorRepository for InMemoryMentorRepository {
    async fn list(&self, query: &MentorQuery) -> Result<(Vec<MentorSummary>, u64), DomainError> {
        Ok(paged(&self.mentors.read().unwrap(), &query.pagination))
    }
}

#[derive(Default)]
pub struct InMemoryUniversityRepository {
    universities: Arc<RwLock<Vec<University>>>,
}

impl InMemoryUniversityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_university(self, university: University) -> Self {
        self.universities.write().unwrap().push(university);
        self
    }
}

#[async_trait]
impl UniversityRepository for InMemoryUniversityRepository {
    async fn list(&self, query: &UniversityQuery) -> Result<(Vec<University>, u64), DomainError> {
        Ok(paged(&self.universities.read().unwrap(), &query.pagination))
    }
}

#[derive(Default)]
pub struct InMemoryLogbookRepository {
    logbooks: Arc<RwLock<Vec<LogbookEntry>>>,
}

impl InMemoryLogbookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logbook(self, logbook: LogbookEntry) -> Self {
        self.logbooks.write().unwrap().push(logbook);
        self
    }
}

#[async_trait]
impl LogbookRepository for InMemoryLogbookRepository {
    async fn list(&self, query: &LogbookQuery) -> Result<(Vec<LogbookEntry>, u64), DomainError> {
        Ok(paged(&self.logbooks.read().unwrap(), &query.pagination))
    }
}

// ============================================================================
// In-Memory Monthly Report Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryMonthlyReportRepository {
    reports: Arc<RwLock<Vec<MonthlyReportEntry>>>,
}

impl InMemoryMonthlyReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(self, report: MonthlyReportEntry) -> Self {
        self.reports.write().unwrap().push(report);
        self
    }
}

#[async_trait]
impl MonthlyReportRepository for InMemoryMonthlyReportRepository {
    async fn list(
        &self,
        query: &OutputQuery,
    ) -> Result<(Vec<MonthlyReportEntry>, u64), DomainError> {
        Ok(paged(&self.reports.read().unwrap(), &query.pagination))
    }

    async fn find_by_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Vec<MonthlyReportEntry>, DomainError> {
        let mut reports: Vec<MonthlyReportEntry> = self
            .reports
            .read()
            .unwrap()
            .iter()
            .filter(|r| &r.participant_id == participant_id)
            .cloned()
            .collect();
        reports.sort_by_key(|r| r.period);
        Ok(reports)
    }
}

// ============================================================================
// In-Memory Analytics Repository
// ============================================================================

/// Fact store whose sections can be made to fail or stall individually.
/// Section names: `participants`, `mentors`, `visits`, `universities`.
#[derive(Default)]
pub struct InMemoryAnalyticsRepository {
    participants: Arc<RwLock<Vec<ParticipantFacts>>>,
    mentors: Arc<RwLock<Vec<MentorFacts>>>,
    visits: Arc<RwLock<Vec<VisitLog>>>,
    active_universities: Arc<RwLock<u64>>,
    failing: Arc<RwLock<HashSet<&'static str>>>,
    delays: Arc<RwLock<HashMap<&'static str, Duration>>>,
}

impl InMemoryAnalyticsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_participant(self, participant: ParticipantFacts) -> Self {
        self.participants.write().unwrap().push(participant);
        self
    }

    pub fn with_mentor(self, mentor: MentorFacts) -> Self {
        self.mentors.write().unwrap().push(mentor);
        self
    }

    pub fn with_visit(self, visit: VisitLog) -> Self {
        self.visits.write().unwrap().push(visit);
        self
    }

    pub fn with_active_universities(self, count: u64) -> Self {
        *self.active_universities.write().unwrap() = count;
        self
    }

    pub fn failing_section(self, section: &'static str) -> Self {
        self.failing.write().unwrap().insert(section);
        self
    }

    pub fn failing_participants(self) -> Self {
        self.failing_section("participants")
    }

    pub fn failing_visits(self) -> Self {
        self.failing_section("visits")
    }

    pub fn slow_section(self, section: &'static str, delay: Duration) -> Self {
        self.delays.write().unwrap().insert(section, delay);
        self
    }

    pub fn slow_participants(self, delay: Duration) -> Self {
        self.slow_section("participants", delay)
    }

    async fn gate(&self, section: &'static str) -> Result<(), DomainError> {
        let delay = self.delays.read().unwrap().get(section).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.read().unwrap().contains(section) {
            return Err(mock_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl AnalyticsRepository for InMemoryAnalyticsRepository {
    async fn active_participants(&self) -> Result<Vec<ParticipantFacts>, DomainError> {
        self.gate("participants").await?;
        Ok(self
            .participants
            .read()
            .unwrap()
            .iter()
            .filter(|p| p.is_active())
            .cloned()
            .collect())
    }

    async fn mentor_roster(&self) -> Result<Vec<MentorFacts>, DomainError> {
        self.gate("mentors").await?;
        let mut mentors = self.mentors.read().unwrap().clone();
        mentors.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(mentors)
    }

    async fn countable_visits(&self) -> Result<Vec<VisitLog>, DomainError> {
        self.gate("visits").await?;
        Ok(self
            .visits
            .read()
            .unwrap()
            .iter()
            .filter(|v| v.is_countable())
            .cloned()
            .collect())
    }

    async fn count_active_universities(&self) -> Result<u64, DomainError> {
        self.gate("universities").await?;
        Ok(*self.active_universities.read().unwrap())
    }
}
