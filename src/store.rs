//! Startup provisioning for the service database and the properties table.

use crate::config::DbConfig;
use crate::error::AppError;
use sqlx::{ConnectOptions, PgPool};

/// Idempotent DDL for the properties table. Length bounds on the text columns
/// are advisory table constraints, not request-validation limits.
const PROPERTIES_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS properties (
    id BIGSERIAL PRIMARY KEY,
    location VARCHAR(100),
    square_meters NUMERIC(10, 2),
    price_per_square_meter NUMERIC(10, 2),
    total_price NUMERIC(10, 2),
    owner VARCHAR(50),
    country VARCHAR(50),
    region VARCHAR(50),
    province VARCHAR(50),
    district VARCHAR(50)
)
"#;

/// Create the configured database if it does not exist. Connects to the admin
/// `postgres` database with the same credentials to run CREATE DATABASE.
/// Call before creating the main pool.
pub async fn ensure_database_exists(config: &DbConfig) -> Result<(), AppError> {
    if config.database.is_empty() || config.database == "postgres" {
        return Ok(());
    }
    let mut conn: sqlx::PgConnection = config.admin_connect_options().connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&config.database)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!(
            "CREATE DATABASE {}",
            quote_ident(&config.database)
        ))
        .execute(&mut conn)
        .await?;
    }
    Ok(())
}

/// Ensure the properties table exists. Must complete before the listener
/// binds; an error here is fatal at startup.
pub async fn ensure_properties_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(PROPERTIES_TABLE_DDL).execute(pool).await?;
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
