//! Database access for the trio services.
//!
//! Each service owns its schema: [`run_migrations`] applies only the
//! migration set belonging to the given [`Service`]. Migration versions are
//! unique across the three sets so the services can also share one database.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use trio_core::service::Service;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// The migration set owned by `service`.
///
/// Versions applied by the other services are ignored rather than treated
/// as missing.
pub fn migrator(service: Service) -> Migrator {
    let mut migrator = match service {
        Service::Fyyur => sqlx::migrate!("./migrations/fyyur"),
        Service::Trivia => sqlx::migrate!("./migrations/trivia"),
        Service::CoffeeShop => sqlx::migrate!("./migrations/coffee_shop"),
    };
    migrator.set_ignore_missing(true);
    migrator
}

/// Apply any pending migrations for `service`.
pub async fn run_migrations(pool: &DbPool, service: Service) -> Result<(), MigrateError> {
    migrator(service).run(pool).await?;
    tracing::debug!(service = %service, "Migrations up to date");
    Ok(())
}
