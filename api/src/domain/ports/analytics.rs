//! Analytics port
//!
//! Read-only fact sets behind the dashboard aggregations. Each method is an
//! independent fetch so callers can run them concurrently.

use async_trait::async_trait;

use crate::domain::analytics::{MentorFacts, ParticipantFacts};
use crate::domain::entities::VisitLog;
use crate::error::DomainError;

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Active participants with university, city, employee and revenue facts
    async fn active_participants(&self) -> Result<Vec<ParticipantFacts>, DomainError>;

    /// All mentors ordered by name then id, each with its actively
    /// assigned participant ids
    async fn mentor_roster(&self) -> Result<Vec<MentorFacts>, DomainError>;

    /// Individual, in-person mentor visits
    async fn countable_visits(&self) -> Result<Vec<VisitLog>, DomainError>;

    async fn count_active_universities(&self) -> Result<u64, DomainError>;
}
