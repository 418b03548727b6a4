//! Request-body extractor whose rejection matches the service error shape.

use crate::error::AppError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

/// `Json<T>` wrapper that turns axum's plain-text rejection into the flat
/// `{"error": ...}` body. A missing or mistyped field fails here, before any
/// storage call.
pub struct Body<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for Body<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Body(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyInput;
    use axum::http::header::CONTENT_TYPE;

    fn json_request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/properties")
            .header(CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn malformed_json_becomes_a_bad_request() {
        let result = Body::<PropertyInput>::from_request(json_request("{not json"), &()).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn missing_fields_become_a_bad_request() {
        let result =
            Body::<PropertyInput>::from_request(json_request(r#"{"location": "Berlin"}"#), &())
                .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn complete_bodies_deserialize() {
        let body = serde_json::json!({
            "location": "Berlin",
            "square_meters": 50,
            "price_per_square_meter": 3000,
            "owner": "A",
            "country": "DE",
            "region": "Berlin",
            "province": "Berlin",
            "district": "Mitte"
        });
        let result =
            Body::<PropertyInput>::from_request(json_request(&body.to_string()), &()).await;
        assert!(result.is_ok());
    }
}
