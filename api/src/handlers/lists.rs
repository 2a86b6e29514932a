//! List handlers for mentors, universities, logbooks and outputs

use axum::{
    extract::{Query, State},
    Json,
};

use crate::app::ListParams;
use crate::domain::entities::{LogbookEntry, MentorSummary, MonthlyReportEntry, University};
use crate::domain::listing::Page;
use crate::error::AppError;
use crate::AppState;

/// GET /mentors
pub async fn list_mentors(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<MentorSummary>>, AppError> {
    Ok(Json(state.listing_service.mentors(&params).await?))
}

/// GET /universities
pub async fn list_universities(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<University>>, AppError> {
    Ok(Json(state.listing_service.universities(&params).await?))
}

/// GET /logbooks
pub async fn list_logbooks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<LogbookEntry>>, AppError> {
    Ok(Json(state.listing_service.logbooks(&params).await?))
}

/// GET /outputs
///
/// Monthly reports across all participants.
pub async fn list_outputs(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<MonthlyReportEntry>>, AppError> {
    Ok(Json(state.listing_service.outputs(&params).await?))
}
