use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Open the connection pool described by `cfg`.
///
/// Every query checks a connection out of this pool and hands it back when
/// it finishes, whether it succeeded or not.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    info!(
        backend = ?db.get_database_backend(),
        max_connections = cfg.max_connections,
        "database pool opened"
    );
    Ok(db)
}

/// Close the pool; outstanding connections are dropped once returned.
pub async fn close(db: DatabaseConnection) -> anyhow::Result<()> {
    db.close().await?;
    info!("database pool closed");
    Ok(())
}
