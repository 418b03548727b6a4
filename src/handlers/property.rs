//! Property CRUD handlers: list, create, read, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::Body;
use crate::model::{Property, PropertyInput};
use crate::response::{message, MessageBody, PROPERTY_DELETED, PROPERTY_REGISTERED, PROPERTY_UPDATED};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("invalid property id".into()))
}

#[utoipa::path(
    get,
    path = "/properties",
    responses(
        (status = 200, description = "All stored properties", body = [Property])
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Property>>, AppError> {
    let rows = state.repo.list().await?;
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/properties",
    request_body = PropertyInput,
    responses(
        (status = 200, description = "Property created", body = MessageBody),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Invalid field values", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Body(input): Body<PropertyInput>,
) -> Result<Json<MessageBody>, AppError> {
    input.validate()?;
    state.repo.create(&input).await?;
    Ok(message(PROPERTY_REGISTERED))
}

#[utoipa::path(
    get,
    path = "/properties/{id}",
    params(("id" = i64, Path, description = "Property id")),
    responses(
        (status = 200, description = "The matching property", body = Property),
        (status = 404, description = "No property with this id", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, AppError> {
    let id = parse_id(&id)?;
    let row = state.repo.get(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(row))
}

#[utoipa::path(
    put,
    path = "/properties/{id}",
    params(("id" = i64, Path, description = "Property id")),
    request_body = PropertyInput,
    responses(
        (status = 200, description = "Property replaced", body = MessageBody),
        (status = 404, description = "No property with this id", body = ErrorBody),
        (status = 422, description = "Invalid field values", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Body(input): Body<PropertyInput>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id)?;
    input.validate()?;
    state
        .repo
        .update(id, &input)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(message(PROPERTY_UPDATED))
}

#[utoipa::path(
    delete,
    path = "/properties/{id}",
    params(("id" = i64, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property removed", body = MessageBody),
        (status = 404, description = "No property with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id)?;
    if !state.repo.delete(id).await? {
        return Err(AppError::NotFound);
    }
    Ok(message(PROPERTY_DELETED))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_parsing_accepts_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id(""), Err(AppError::BadRequest(_))));
    }
}
