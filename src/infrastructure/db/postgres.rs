use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

const MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_CONNECT_RETRIES: u32 = 5;

/// Connects to Postgres, retrying with exponential backoff (2s, 4s, 8s, ...).
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 0;
    let mut wait = Duration::from_secs(2);

    loop {
        let result = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await;

        match result {
            Ok(pool) => {
                info!("Portfolio database connection established");
                return Ok(pool);
            }
            Err(e) if attempt < MAX_CONNECT_RETRIES => {
                attempt += 1;
                warn!(
                    "Database unreachable (attempt {}/{}): {}. Retrying in {:?}",
                    attempt, MAX_CONNECT_RETRIES, e, wait
                );
                tokio::time::sleep(wait).await;
                wait *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Creates the projects, testimonials and contacts tables when missing.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
