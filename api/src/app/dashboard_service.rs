//! Dashboard service
//!
//! Runs the independent fact fetches concurrently, each bounded by the
//! configured timeout, and applies the failure policy uniformly before
//! handing the results to the pure summary computation.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::config::SummaryFailurePolicy;
use crate::domain::analytics::{
    mentor_groups, rollup, university_groups, DashboardSummary, GroupBy, RollupOrder, RollupRow,
    SummaryInputs,
};
use crate::domain::ports::AnalyticsRepository;
use crate::error::{AppError, DomainError};

pub struct DashboardService {
    analytics: Arc<dyn AnalyticsRepository>,
    timeout: Duration,
    policy: SummaryFailurePolicy,
    top_n: usize,
}

impl DashboardService {
    pub fn new(
        analytics: Arc<dyn AnalyticsRepository>,
        timeout: Duration,
        policy: SummaryFailurePolicy,
        top_n: usize,
    ) -> Self {
        Self {
            analytics,
            timeout,
            policy,
            top_n,
        }
    }

    /// Build the dashboard summary
    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        let (participants, mentors, visits, universities) = tokio::join!(
            self.bounded("participants", self.analytics.active_participants()),
            self.bounded("mentors", self.analytics.mentor_roster()),
            self.bounded("visits", self.analytics.countable_visits()),
            self.bounded("universities", self.analytics.count_active_universities()),
        );

        let participants = self.settle("participants", participants)?;
        let mentors = self.settle("mentors", mentors)?;
        let visits = self.settle("visits", visits)?;
        let active_universities = self.settle("universities", universities)?;

        let inputs = SummaryInputs {
            participants: participants.as_deref(),
            mentors: mentors.as_deref(),
            visits: visits.as_deref(),
            active_universities,
        };

        Ok(DashboardSummary::compute(inputs, self.top_n, Utc::now()))
    }

    /// Rollup rows for one grouping. Both fetches are required.
    pub async fn rollups(
        &self,
        group_by: GroupBy,
        order: RollupOrder,
    ) -> Result<Vec<RollupRow>, AppError> {
        let (participants, mentors) = tokio::try_join!(
            self.bounded("participants", self.analytics.active_participants()),
            self.bounded("mentors", self.analytics.mentor_roster()),
        )
        .map_err(AppError::fetch("dashboard rollups"))?;

        tracing::debug!(
            ?group_by,
            ?order,
            participants = participants.len(),
            mentors = mentors.len(),
            "Computing rollups"
        );

        let groups = match group_by {
            GroupBy::University => university_groups(&mentors),
            GroupBy::Mentor => mentor_groups(&mentors),
        };
        let by_id: HashMap<_, _> = participants.into_iter().map(|p| (p.id, p)).collect();

        Ok(rollup(groups, &by_id, order))
    }

    async fn bounded<T>(
        &self,
        section: &'static str,
        fetch: impl Future<Output = Result<T, DomainError>>,
    ) -> Result<T, DomainError> {
        match tokio::time::timeout(self.timeout, fetch).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::Timeout(format!(
                "{} after {}ms",
                section,
                self.timeout.as_millis()
            ))),
        }
    }

    fn settle<T>(
        &self,
        section: &'static str,
        result: Result<T, DomainError>,
    ) -> Result<Option<T>, AppError> {
        match (result, self.policy) {
            (Ok(value), _) => Ok(Some(value)),
            (Err(source), SummaryFailurePolicy::Fail) => Err(AppError::FetchFailed {
                resource: "dashboard summary",
                source,
            }),
            (Err(e), SummaryFailurePolicy::Degrade) => {
                tracing::warn!(section, error = %e, "Dashboard section degraded");
                Ok(None)
            }
        }
    }
}
