use crate::models::{EndpointDirectory, RootResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET / handler - Service metadata
///
/// Returns the configured title and version, a welcome message, and a
/// directory of the available endpoint paths. Never touches the store.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service metadata", body = RootResponse)
    ),
    tag = "meta"
)]
pub async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        title: state.config.api_title.clone(),
        version: state.config.api_version.clone(),
        message: "Welcome to the item service".to_string(),
        endpoints: EndpointDirectory {
            items: routes::ITEMS.to_string(),
            docs: routes::DOCS.to_string(),
            openapi: routes::OPENAPI.to_string(),
        },
    })
}
