//! Dashboard handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::domain::analytics::{DashboardSummary, GroupBy, RollupOrder, RollupRow};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for rollups. Unknown values fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupQuery {
    pub group_by: Option<String>,
    pub order_by: Option<String>,
}

/// GET /dashboard/summary
pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, AppError> {
    let summary = state.dashboard_service.summary().await?;
    Ok(Json(summary))
}

/// GET /dashboard/rollups?groupBy=university|mentor&orderBy=participants|growth
pub async fn get_rollups(
    State(state): State<AppState>,
    Query(query): Query<RollupQuery>,
) -> Result<Json<Vec<RollupRow>>, AppError> {
    let group_by = GroupBy::from_param(query.group_by.as_deref());
    let order = RollupOrder::from_param(query.order_by.as_deref());

    let rows = state.dashboard_service.rollups(group_by, order).await?;
    Ok(Json(rows))
}
