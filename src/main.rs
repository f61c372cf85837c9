//! reviews-api: serves a fixed review feed as JSON.
//! Used by: binary entrypoint.

pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = config::Config::from_env()?;
    let state = state::build_state();
    tracing::info!("starting reviews-api on {}", config.addr);

    if let Err(err) = server::run(state, config.addr).await {
        tracing::error!(error = %err, "server exited");
        return Err(err.into());
    }
    Ok(())
}
