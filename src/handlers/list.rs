use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, ListQuery};
use crate::routes;
use crate::state::AppState;
use crate::store;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// GET /items/ handler - List items
///
/// Returns a window over all stored items in insertion order.
/// Query parameters:
/// - skip: Number of items to skip (optional, default: 0)
/// - limit: Maximum number of items to return (optional, default: 100)
#[utoipa::path(
    get,
    path = routes::ITEMS,
    params(
        ("skip" = Option<i64>, Query, description = "Number of items to skip"),
        ("limit" = Option<i64>, Query, description = "Maximum number of items to return")
    ),
    responses(
        (status = 200, description = "List of items", body = Vec<Item>),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(100);

    // Validate the window before acquiring a session.
    if skip < 0 {
        return Err(ApiError::InvalidQueryParam(format!(
            "skip must be non-negative, got {}",
            skip
        )));
    }
    if limit < 1 {
        return Err(ApiError::InvalidQueryParam(format!(
            "limit must be positive, got {}",
            limit
        )));
    }

    let session = state.db.session().await?;
    let items = store::list(&session, skip, limit).await?;

    tracing::info!("Listed {} items (skip: {}, limit: {})", items.len(), skip, limit);
    Ok((StatusCode::OK, Json(items)))
}
