use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use crate::store;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /items/:id handler - Retrieve a single item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Id of the item")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let session = state.db.session().await?;

    match store::get(&session, id).await? {
        Some(item) => {
            tracing::info!("Retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => Err(ApiError::ItemNotFound(id)),
    }
}
