use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, ItemCreate};
use crate::routes;
use crate::state::AppState;
use crate::store;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// PUT /items/:id handler - Replace an existing item
///
/// Every mutable field is overwritten with the supplied input; this is a
/// wholesale replace, not a partial patch.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Id of the item")
    ),
    request_body = ItemCreate,
    responses(
        (status = 200, description = "Item replaced", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ItemCreate>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let session = state.db.session().await?;

    match store::update(&session, id, &input).await? {
        Some(item) => {
            tracing::info!("Replaced item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => Err(ApiError::ItemNotFound(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{create_handler, get_handler};
    use crate::test_support::test_app_state;
    use axum::{body::Body, http::Request, routing::get, routing::post, Router};
    use tower::ServiceExt;

    fn routes(state: crate::state::AppState) -> Router {
        Router::new()
            .route(crate::routes::ITEMS, post(create_handler))
            .route(crate::routes::ITEM, get(get_handler).put(update_handler))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_update_endpoint_replaces_all_fields() {
        let Some(state) = test_app_state("item_api_update_test").await else {
            println!("Update endpoint test skipped (Postgres may not be running)");
            return;
        };
        let app = routes(state);

        let create_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items/")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"name": "foo", "description": "original"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(create_response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(create_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: Item = serde_json::from_slice(&body).unwrap();

        let update_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/items/{}", created.id))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": "baz"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(update_response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(update_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let replaced: Item = serde_json::from_slice(&body).unwrap();
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.name, "baz");
        // The old description is gone: full replace, not a merge.
        assert_eq!(replaced.description, None);

        let get_response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/items/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(get_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let fetched: Item = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched, replaced);
    }

    #[tokio::test]
    async fn test_update_endpoint_not_found() {
        let Some(state) = test_app_state("item_api_update_missing_test").await else {
            println!("Update-missing endpoint test skipped (Postgres may not be running)");
            return;
        };
        let app = routes(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/items/123456")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": "ghost"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
