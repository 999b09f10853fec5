//! Service entry point: environment, logging, bind, serve.

use std::sync::Arc;

use item_service::{routes, AppState, DbConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("item_service=debug".parse()?),
        )
        .init();

    let db = DbConfig::from_env()?;
    tracing::info!(
        host = %db.host(),
        port = db.port(),
        database = db.database(),
        "database configuration loaded"
    );

    let state = AppState { db: Arc::new(db) };
    let app = routes::app(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
