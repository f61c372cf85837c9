//! Catch-all for unrouted paths.
//! Used by: server.

use axum::http::Uri;

use crate::error::Error;

pub async fn not_found(uri: Uri) -> Error {
    tracing::debug!(path = %uri.path(), "no route");
    Error::NotFound(uri.path().to_owned())
}
