//! Repository port traits
//!
//! These traits define the interface for data access.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! List methods return one page of rows plus the total number of rows
//! matching the query's filters and search.

use async_trait::async_trait;

use crate::domain::entities::{
    LogbookEntry, MentorSummary, MonthlyReportEntry, ParticipantDetail, ParticipantFilterOptions,
    ParticipantId, ParticipantSummary, University,
};
use crate::domain::listing::{
    LogbookQuery, MentorQuery, OutputQuery, ParticipantQuery, UniversityQuery,
};
use crate::error::DomainError;

/// Repository for participants
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// List participants matching the query
    async fn list(
        &self,
        query: &ParticipantQuery,
    ) -> Result<(Vec<ParticipantSummary>, u64), DomainError>;

    /// Find a participant by its legacy TKM identifier
    async fn find_by_legacy_id(
        &self,
        legacy_id: &str,
    ) -> Result<Option<ParticipantDetail>, DomainError>;

    /// Distinct statuses, provinces and cities for the list filters
    async fn filter_options(&self) -> Result<ParticipantFilterOptions, DomainError>;

    /// Active employees of the participant's business
    async fn active_employee_count(&self, id: &ParticipantId) -> Result<u64, DomainError>;
}

/// Repository for mentors
#[async_trait]
pub trait MentorRepository: Send + Sync {
    async fn list(&self, query: &MentorQuery) -> Result<(Vec<MentorSummary>, u64), DomainError>;
}

/// Repository for universities
#[async_trait]
pub trait UniversityRepository: Send + Sync {
    async fn list(&self, query: &UniversityQuery) -> Result<(Vec<University>, u64), DomainError>;
}

/// Repository for mentor visit logbooks
#[async_trait]
pub trait LogbookRepository: Send + Sync {
    async fn list(&self, query: &LogbookQuery) -> Result<(Vec<LogbookEntry>, u64), DomainError>;
}

/// Repository for monthly business reports ("outputs")
#[async_trait]
pub trait MonthlyReportRepository: Send + Sync {
    async fn list(
        &self,
        query: &OutputQuery,
    ) -> Result<(Vec<MonthlyReportEntry>, u64), DomainError>;

    /// All reports of one participant, oldest period first
    async fn find_by_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Vec<MonthlyReportEntry>, DomainError>;
}
