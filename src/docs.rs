//! OpenAPI description, generated from the same types the handlers validate
//! with so the document cannot drift from the runtime behavior.

use crate::error::ErrorBody;
use crate::handlers::property;
use crate::model::{Property, PropertyInput};
use crate::response::MessageBody;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Property Inventory API",
        description = "API for creating, reading, updating, and deleting properties."
    ),
    paths(
        property::list,
        property::create,
        property::read,
        property::update,
        property::delete
    ),
    components(schemas(Property, PropertyInput, MessageBody, ErrorBody))
)]
pub struct ApiDoc;
