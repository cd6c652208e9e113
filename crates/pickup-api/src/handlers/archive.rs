//! Sweep trigger handler
//!
//! Any method on the trigger path runs a sweep, except `OPTIONS`, which is
//! answered as a CORS preflight without touching the backend.

use axum::{
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use pickup_service::SweepResponse;

use crate::response::{ApiResult, Cors};
use crate::state::AppState;

/// Run the archival sweep
///
/// ANY /archive-past-communities
pub async fn archive_past_communities(
    method: Method,
    State(state): State<AppState>,
) -> ApiResult<Response> {
    if method == Method::OPTIONS {
        return Ok(Cors(()).into_response());
    }

    let outcome = state.run_sweep().await?;
    Ok(Cors(Json(SweepResponse::from(&outcome))).into_response())
}
