//! Listing service
//!
//! Parses flat query-string parameters into typed list queries and wraps
//! repository results in the page envelope.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{
    LogbookEntry, MentorSummary, MonthlyReportEntry, ParticipantFilterOptions, ParticipantSummary,
    University,
};
use crate::domain::listing::{
    ListQuery, LogbookQuery, MentorQuery, OutputQuery, Page, ParticipantQuery, UniversityQuery,
};
use crate::domain::ports::{
    LogbookRepository, MentorRepository, MonthlyReportRepository, ParticipantRepository,
    UniversityRepository,
};
use crate::error::AppError;

/// Raw query-string parameters
pub type ListParams = HashMap<String, String>;

/// Service for the paginated list views
pub struct ListingService {
    participants: Arc<dyn ParticipantRepository>,
    mentors: Arc<dyn MentorRepository>,
    universities: Arc<dyn UniversityRepository>,
    logbooks: Arc<dyn LogbookRepository>,
    reports: Arc<dyn MonthlyReportRepository>,
}

impl ListingService {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        mentors: Arc<dyn MentorRepository>,
        universities: Arc<dyn UniversityRepository>,
        logbooks: Arc<dyn LogbookRepository>,
        reports: Arc<dyn MonthlyReportRepository>,
    ) -> Self {
        Self {
            participants,
            mentors,
            universities,
            logbooks,
            reports,
        }
    }

    pub async fn participants(
        &self,
        params: &ListParams,
    ) -> Result<Page<ParticipantSummary>, AppError> {
        let query = ParticipantQuery::from_params(params);
        log_query("participants", &query);

        let (data, total) = self
            .participants
            .list(&query)
            .await
            .map_err(AppError::fetch("participants"))?;

        Ok(Page::new(data, total, &query.pagination))
    }

    pub async fn participant_filters(&self) -> Result<ParticipantFilterOptions, AppError> {
        self.participants
            .filter_options()
            .await
            .map_err(AppError::fetch("participant filters"))
    }

    pub async fn mentors(&self, params: &ListParams) -> Result<Page<MentorSummary>, AppError> {
        let query = MentorQuery::from_params(params);
        log_query("mentors", &query);

        let (data, total) = self
            .mentors
            .list(&query)
            .await
            .map_err(AppError::fetch("mentors"))?;

        Ok(Page::new(data, total, &query.pagination))
    }

    pub async fn universities(&self, params: &ListParams) -> Result<Page<University>, AppError> {
        let query = UniversityQuery::from_params(params);
        log_query("universities", &query);

        let (data, total) = self
            .universities
            .list(&query)
            .await
            .map_err(AppError::fetch("universities"))?;

        Ok(Page::new(data, total, &query.pagination))
    }

    pub async fn logbooks(&self, params: &ListParams) -> Result<Page<LogbookEntry>, AppError> {
        let query = LogbookQuery::from_params(params);
        log_query("logbooks", &query);

        let (data, total) = self
            .logbooks
            .list(&query)
            .await
            .map_err(AppError::fetch("logbooks"))?;

        Ok(Page::new(data, total, &query.pagination))
    }

    pub async fn outputs(
        &self,
        params: &ListParams,
    ) -> Result<Page<MonthlyReportEntry>, AppError> {
        let query = OutputQuery::from_params(params);
        log_query("outputs", &query);

        let (data, total) = self
            .reports
            .list(&query)
            .await
            .map_err(AppError::fetch("outputs"))?;

        Ok(Page::new(data, total, &query.pagination))
    }
}

fn log_query<S, F>(entity: &str, query: &ListQuery<S, F>)
where
    S: std::fmt::Debug,
    F: Ord,
{
    tracing::debug!(
        entity,
        page = query.pagination.page,
        page_size = query.pagination.page_size,
        sort = ?query.sort,
        order = ?query.order,
        filters = query.filters.len(),
        search = query.search.is_some(),
        "List query"
    );
}
