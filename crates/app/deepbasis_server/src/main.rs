//! DeepBasis HTTP server binary.

use std::sync::Arc;

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use deepbasis_api::{AppState, config::ApiConfig};
use deepbasis_core::user::PgUserStore;

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "deepbasis_server", about = "DeepBasis HTTP server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    bind_addr: String,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/deepbasis"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,deepbasis_api=debug,deepbasis_core=debug".parse().unwrap()
            }),
        )
        .init();

    let args = Args::parse();
    let config = ApiConfig::from_env();

    info!(bind_addr = %args.bind_addr, "starting deepbasis_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    info!("running database migrations");
    deepbasis_api::migrate(&pool).await?;

    let store = Arc::new(PgUserStore::new(pool));
    let state = AppState::new(store, &config);
    let app = deepbasis_api::router(state);

    let listener = tokio::net::TcpListener::bind(&args.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
