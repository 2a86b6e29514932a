//! Participant handlers
//!
//! Endpoints for the participant list, filters, detail and outputs.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::app::ListParams;
use crate::domain::entities::{
    ParticipantDetail, ParticipantFilterOptions, ParticipantOutputs, ParticipantSummary,
};
use crate::domain::listing::Page;
use crate::error::AppError;
use crate::AppState;

/// GET /participants
pub async fn list_participants(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<ParticipantSummary>>, AppError> {
    let page = state.listing_service.participants(&params).await?;
    Ok(Json(page))
}

/// GET /participants/filters
///
/// Distinct values for the list's filter dropdowns.
pub async fn participant_filters(
    State(state): State<AppState>,
) -> Result<Json<ParticipantFilterOptions>, AppError> {
    let options = state.listing_service.participant_filters().await?;
    Ok(Json(options))
}

/// GET /participants/:id
///
/// `id` is the legacy TKM identifier.
pub async fn get_participant(
    State(state): State<AppState>,
    Path(legacy_id): Path<String>,
) -> Result<Json<ParticipantDetail>, AppError> {
    let detail = state.participant_service.detail(&legacy_id).await?;
    Ok(Json(detail))
}

/// GET /participants/:id/outputs
pub async fn get_participant_outputs(
    State(state): State<AppState>,
    Path(legacy_id): Path<String>,
) -> Result<Json<ParticipantOutputs>, AppError> {
    let outputs = state.participant_service.outputs(&legacy_id).await?;
    Ok(Json(outputs))
}
