//! Shared application state.

use std::sync::Arc;

use crate::models::review::{self, ReviewItem};

pub struct AppStateInner {
    pub reviews: Arc<[ReviewItem]>,
}

pub type AppState = Arc<AppStateInner>;

pub fn build_state() -> AppState {
    let reviews: Arc<[ReviewItem]> = review::seed().into();
    tracing::debug!(count = reviews.len(), "review catalog loaded");
    Arc::new(AppStateInner { reviews })
}
