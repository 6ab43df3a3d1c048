//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Longest short code accepted on the redirect path.
///
/// Generated codes are 6 characters; the bound only guards against junk
/// lookups hitting the store.
const MAX_CODE_LENGTH: usize = 20;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// Each visit is classified and recorded in a detached task, so the redirect
/// neither waits for the validation delay nor fails when recording fails.
/// A client that abandons the request still gets its click tracked.
///
/// # Errors
///
/// - `400` - code empty or longer than [`MAX_CODE_LENGTH`]
/// - `404` - unknown code
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    if code.is_empty() || code.len() > MAX_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Invalid short code",
            json!({ "max_length": MAX_CODE_LENGTH, "provided_length": code.len() }),
        ));
    }

    let link = state.link_service.get_by_code(&code).await?;

    state.click_service.track_visit_detached(link.id);

    Ok(Redirect::temporary(&link.original_url))
}
