//! Environment-driven settings for the PostgreSQL connection and the listener.

use sqlx::postgres::PgConnectOptions;

/// Listening port. Fixed by the deployment contract, not configurable.
pub const LISTEN_PORT: u16 = 3000;

/// Connection settings for the storage engine, read from discrete environment
/// variables (`DATABASE_HOST`, `DATABASE_USER`, `DATABASE_PASSWORD`,
/// `DATABASE_NAME`).
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            user: "postgres".into(),
            password: String::new(),
            database: "property_inventory".into(),
        }
    }
}

impl DbConfig {
    /// Read settings from the process environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("DATABASE_HOST").unwrap_or(defaults.host),
            user: std::env::var("DATABASE_USER").unwrap_or(defaults.user),
            password: std::env::var("DATABASE_PASSWORD").unwrap_or(defaults.password),
            database: std::env::var("DATABASE_NAME").unwrap_or(defaults.database),
        }
    }

    /// Connect options for the service database.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    /// Connect options for the admin `postgres` database, used once at startup
    /// to create the service database when it does not exist yet.
    pub fn admin_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
            .database("postgres")
    }
}
