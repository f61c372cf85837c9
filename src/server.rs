//! Axum router and server lifecycle.
//! Used by: main.

use std::future::Future;
use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::console;
use crate::error::{Error, Result};
use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::reviews::list))
        .route("/health", get(handlers::health::health))
        .fallback(handlers::fallback::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// A bound listener paired with its router. Dropping it without calling
/// [`Server::serve`] releases the port.
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
}

impl Server {
    pub async fn bind(addr: SocketAddr, state: AppState) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| Error::Bind { addr, source })?;
        Ok(Self { listener, local_addr, router: build_router(state) })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("server stopped");
        Ok(())
    }
}

pub async fn run(state: AppState, addr: SocketAddr) -> Result<()> {
    let server = Server::bind(addr, state).await?;
    let local = server.local_addr();
    tracing::debug!("listening on {}", local);
    console::print_startup(local.port());
    server.serve(shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for ctrl-c; serving until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("ctrl-c received, shutting down");
}
