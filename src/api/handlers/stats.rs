//! Handler for paginated earnings analytics.

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::json;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::stats::LinkStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns per-link analytics for one page of links.
///
/// # Endpoint
///
/// `GET /stats?page=1&limit=10`
///
/// # Pagination
///
/// `page` is 1-based (default 1), `limit` defaults to 10 with a ceiling of
/// 100. A page past the end of the data returns an empty array with `200`.
///
/// # Partial Failure
///
/// A link whose aggregation fails is skipped; the remaining links on the
/// page are still returned.
///
/// # Errors
///
/// - `422` - page or limit out of range
/// - `500` - store error while listing links
pub async fn stats_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<LinkStatsResponse>>, AppError> {
    let (offset, limit) = params
        .into_offset_limit()
        .map_err(|message| AppError::validation(message, json!({})))?;

    let reports = state.stats_service.page_report(offset, limit).await?;

    Ok(Json(reports.into_iter().map(Into::into).collect()))
}
