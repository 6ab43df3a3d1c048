//! Handler for link creation.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a target URL.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Idempotence
///
/// Re-posting a URL that is already shortened returns the existing link with
/// the same `id` and `short_code`, still with status 201.
///
/// # Errors
///
/// - `422` - empty/over-long URL or URL outside the affiliate domain
/// - `500` - short-code allocation exhausted or store error
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.shorten(payload.original_url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
