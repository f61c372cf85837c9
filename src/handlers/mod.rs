//! HTTP handler modules.
//! Used by: server.

pub mod fallback;
pub mod health;
pub mod reviews;
