mod config;
mod error;
mod routes;
mod session;
mod state;

use std::sync::Arc;

use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = ServerConfig::from_env();
    let state = AppState::from_config(&config)?;

    let bind_addr = config.bind_addr();
    let app = routes::router(Arc::new(state));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server running on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
