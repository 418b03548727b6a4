//! Typed CRUD access to the properties table.

use crate::error::AppError;
use crate::model::{Property, PropertyInput};
use sqlx::PgPool;

const INSERT_SQL: &str = "INSERT INTO properties \
    (location, square_meters, price_per_square_meter, total_price, owner, country, region, province, district) \
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *";

const UPDATE_SQL: &str = "UPDATE properties SET location = $2, square_meters = $3, \
    price_per_square_meter = $4, total_price = $5, owner = $6, country = $7, \
    region = $8, province = $9, district = $10 WHERE id = $1 RETURNING *";

/// Mediates between validated requests and the storage engine. Holds the pool
/// as an injected dependency; performs no retries and no cross-statement
/// transactions (every mutation is a single statement).
#[derive(Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All rows in insertion order.
    pub async fn list(&self) -> Result<Vec<Property>, AppError> {
        tracing::debug!("listing properties");
        let rows = sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a new row. `total_price` is derived here; the caller never
    /// supplies it.
    pub async fn create(&self, input: &PropertyInput) -> Result<Property, AppError> {
        tracing::debug!(location = %input.location, "inserting property");
        let row = sqlx::query_as::<_, Property>(INSERT_SQL)
            .bind(&input.location)
            .bind(input.square_meters)
            .bind(input.price_per_square_meter)
            .bind(input.total_price())
            .bind(&input.owner)
            .bind(&input.country)
            .bind(&input.region)
            .bind(&input.province)
            .bind(&input.district)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Property>, AppError> {
        tracing::debug!(id, "fetching property");
        let row = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Overwrite the entire row matching `id`, recomputing `total_price` from
    /// the new values. Partial updates are not supported. `None` when no row
    /// matched.
    pub async fn update(
        &self,
        id: i64,
        input: &PropertyInput,
    ) -> Result<Option<Property>, AppError> {
        tracing::debug!(id, "updating property");
        let row = sqlx::query_as::<_, Property>(UPDATE_SQL)
            .bind(id)
            .bind(&input.location)
            .bind(input.square_meters)
            .bind(input.price_per_square_meter)
            .bind(input.total_price())
            .bind(&input.owner)
            .bind(&input.country)
            .bind(&input.region)
            .bind(&input.province)
            .bind(&input.district)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Delete the row matching `id`. `false` when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "deleting property");
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Storage round-trip used by the readiness probe.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the underlying pool. Called once on graceful shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_binds_nine_values_and_never_writes_the_key() {
        assert!(INSERT_SQL.contains("$9"));
        assert!(!INSERT_SQL.contains("$10"));
        assert!(!INSERT_SQL.contains("(id,"));
    }

    #[test]
    fn update_keys_by_id_and_overwrites_every_column() {
        assert!(UPDATE_SQL.contains("WHERE id = $1"));
        assert!(UPDATE_SQL.contains("$10"));
        for column in [
            "location",
            "square_meters",
            "price_per_square_meter",
            "total_price",
            "owner",
            "country",
            "region",
            "province",
            "district",
        ] {
            assert!(
                UPDATE_SQL.contains(&format!("{column} = $")),
                "column not overwritten: {column}"
            );
        }
    }
}
