//! Success-message bodies shared by the mutation handlers.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

pub const PROPERTY_REGISTERED: &str = "Property registered successfully";
pub const PROPERTY_UPDATED: &str = "Property updated successfully";
pub const PROPERTY_DELETED: &str = "Property deleted successfully";

/// Flat message body: `{"message": "..."}`.
#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Property registered successfully")]
    pub message: String,
}

pub fn message(text: &str) -> Json<MessageBody> {
    Json(MessageBody {
        message: text.to_string(),
    })
}
