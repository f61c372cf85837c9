//! Review listing endpoint.
//! Used by: server.

use axum::extract::State;
use axum::Json;

use crate::models::review::ReviewItem;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<ReviewItem>> {
    tracing::debug!(count = state.reviews.len(), "serving reviews");
    Json(state.reviews.to_vec())
}
