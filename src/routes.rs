//! Route table: property CRUD, operational probes, API documentation.

use crate::docs::ApiDoc;
use crate::handlers::{common, property};
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// CRUD and probe routes.
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .route("/properties", get(property::list).post(property::create))
        .route(
            "/properties/:id",
            get(property::read)
                .put(property::update)
                .delete(property::delete),
        )
        .route("/health", get(common::health))
        .route("/ready", get(common::ready))
        .with_state(state)
}

/// Full application router with the documentation UI mounted at `/api-docs`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(app_routes(state))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::PropertyRepository;
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use tower::ServiceExt;

    // Lazy pool: no connection is attempted until a handler touches storage,
    // so every pre-storage path is testable without a database.
    fn test_state() -> AppState {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy("postgres://postgres@localhost/property_inventory_test")
            .expect("lazy pool");
        AppState {
            repo: PropertyRepository::new(pool),
        }
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), 64 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unparsable_id_is_rejected_before_storage() {
        let res = app_routes(test_state())
            .oneshot(
                Request::builder()
                    .uri("/properties/not-a-number")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert_eq!(body["error"], "invalid property id");
    }

    #[tokio::test]
    async fn create_with_missing_fields_is_rejected() {
        let body = serde_json::json!({
            "location": "Berlin",
            "square_meters": 50,
            "price_per_square_meter": 3000
        });
        let res = app_routes(test_state())
            .oneshot(post_json("/properties", body))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(res).await["error"].is_string());
    }

    #[tokio::test]
    async fn create_with_negative_area_is_rejected() {
        let body = serde_json::json!({
            "location": "Berlin",
            "square_meters": -50,
            "price_per_square_meter": 3000,
            "owner": "A",
            "country": "DE",
            "region": "Berlin",
            "province": "Berlin",
            "district": "Mitte"
        });
        let res = app_routes(test_state())
            .oneshot(post_json("/properties", body))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(res).await;
        assert_eq!(body["error"], "square_meters must be non-negative");
    }

    #[tokio::test]
    async fn health_answers_without_storage() {
        let res = app_routes(test_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let res = app(test_state())
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["info"]["title"], "Property Inventory API");
    }
}
