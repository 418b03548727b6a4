//! Property row and request-body types.

use crate::error::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored property row.
///
/// Every column except the key is nullable at the storage layer; rows written
/// through this service always carry all fields, but the projection tolerates
/// externally inserted rows with NULLs.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Property {
    /// Storage-assigned key; never reused within a table lifetime.
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Berlin")]
    pub location: Option<String>,
    #[schema(example = 50.0)]
    pub square_meters: Option<Decimal>,
    #[schema(example = 3000.0)]
    pub price_per_square_meter: Option<Decimal>,
    /// Derived: `price_per_square_meter * square_meters`, recomputed on every
    /// create and update. Never accepted from the caller.
    #[schema(example = 150000.0)]
    pub total_price: Option<Decimal>,
    #[schema(example = "A")]
    pub owner: Option<String>,
    #[schema(example = "DE")]
    pub country: Option<String>,
    #[schema(example = "Berlin")]
    pub region: Option<String>,
    #[schema(example = "Berlin")]
    pub province: Option<String>,
    #[schema(example = "Mitte")]
    pub district: Option<String>,
}

/// Request body for create and update. All eight fields are required; a
/// missing or mistyped field fails deserialization before any storage call.
/// Unknown keys (including `id` and `total_price`) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyInput {
    #[schema(example = "Berlin")]
    pub location: String,
    #[schema(example = 50.0)]
    pub square_meters: Decimal,
    #[schema(example = 3000.0)]
    pub price_per_square_meter: Decimal,
    #[schema(example = "A")]
    pub owner: String,
    #[schema(example = "DE")]
    pub country: String,
    #[schema(example = "Berlin")]
    pub region: String,
    #[schema(example = "Berlin")]
    pub province: String,
    #[schema(example = "Mitte")]
    pub district: String,
}

impl PropertyInput {
    /// Range checks beyond what deserialization enforces. Negative sizes and
    /// prices are rejected, not coerced.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.square_meters < Decimal::ZERO {
            return Err(AppError::Validation(
                "square_meters must be non-negative".into(),
            ));
        }
        if self.price_per_square_meter < Decimal::ZERO {
            return Err(AppError::Validation(
                "price_per_square_meter must be non-negative".into(),
            ));
        }
        Ok(())
    }

    /// The derived column value, rounded to the 2 fractional digits the table
    /// stores.
    pub fn total_price(&self) -> Decimal {
        (self.price_per_square_meter * self.square_meters).round_dp(2)
    }
}
