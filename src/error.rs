//! Unified error types for the reviews service.
//! Used by: config, server, handlers.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Config(_) | Error::Bind { .. } | Error::Serve(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_returns_404() {
        let response = Error::NotFound("/nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn serve_error_returns_500() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let response = Error::Serve(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(Error::NotFound("/x".into()).to_string(), "not found: /x");
        assert_eq!(
            Error::Config("PORT must be a number".into()).to_string(),
            "invalid configuration: PORT must be a number"
        );

        let addr: SocketAddr = "127.0.0.1:4000".parse().unwrap();
        let source = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        assert_eq!(
            Error::Bind { addr, source }.to_string(),
            "failed to bind 127.0.0.1:4000: address in use"
        );
    }
}
