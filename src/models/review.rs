//! The review record and the fixed catalog.
//! Used by: state, handlers::reviews.

use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct ReviewItem {
    pub id: String,
    pub title: String,
}

impl ReviewItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into() }
    }
}

/// The three reviews the service publishes, in display order.
pub fn seed() -> Vec<ReviewItem> {
    vec![
        ReviewItem::new("1", "Book Review: Twisted Love"),
        ReviewItem::new("2", "Game Review: Subway Suffers"),
        ReviewItem::new("3", "Show Review: Friends"),
    ]
}
