use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use crate::store;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /items/:id handler - Remove an item
///
/// The response body carries the record's last state before removal.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Id of the item")
    ),
    responses(
        (status = 200, description = "Item deleted, last state returned", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let session = state.db.session().await?;

    match store::delete(&session, id).await? {
        Some(item) => {
            tracing::info!("Deleted item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => Err(ApiError::ItemNotFound(id)),
    }
}
