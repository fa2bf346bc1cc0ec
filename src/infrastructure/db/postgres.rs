use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

const MAX_RETRIES: u32 = 5;

/// Connects to Postgres, retrying with exponential backoff so the service
/// survives the database coming up after it does.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut wait = Duration::from_secs(2);

    for attempt in 1..=MAX_RETRIES {
        match PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                info!("Database connection established.");
                return Ok(pool);
            }
            Err(e) if attempt < MAX_RETRIES => {
                warn!(
                    "Failed to connect to database (attempt {}/{}): {}. Retrying in {}s...",
                    attempt,
                    MAX_RETRIES,
                    e,
                    wait.as_secs()
                );
                tokio::time::sleep(wait).await;
                wait *= 2;
            }
            Err(e) => return Err(e),
        }
    }

    unreachable!("retry loop either returns a pool or the final error")
}
