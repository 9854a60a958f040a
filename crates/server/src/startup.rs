use std::future::Future;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the pool and bring the schema up to date.
pub async fn init_store(cfg: &DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    info!(event = "migrations_applied", "database schema ready");
    Ok(db)
}

pub fn build_app(db: DatabaseConnection, cfg: &AppConfig) -> Router {
    let state = AppState::new(db, cfg.admin.token.clone());
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, shutting down"),
        Err(e) => {
            error!(event = "signal_listen_failed", error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}

/// Public entry: serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, shutdown_signal()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests and close
/// the pool.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = init_store(&cfg.database).await?;
    let app = build_app(db.clone(), &cfg);

    // host may be a name; bind resolves it
    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "starting calculation server");

    let served = axum::serve(listener, app).with_graceful_shutdown(shutdown).await;
    models::db::close(db).await?;
    served?;
    Ok(())
}
