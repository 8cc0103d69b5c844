use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, ItemCreate};
use crate::routes;
use crate::state::AppState;
use crate::store;
use axum::{extract::State, http::StatusCode, Json};

/// POST /items/ handler - Create a new item
///
/// The body is validated against the input shape before any store call;
/// the store assigns the id and the stored result is returned.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = ItemCreate,
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(input): Json<ItemCreate>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let session = state.db.session().await?;
    let item = store::create(&session, &input).await?;

    tracing::info!("Created item with id: {}", item.id);
    Ok((StatusCode::OK, Json(item)))
}
