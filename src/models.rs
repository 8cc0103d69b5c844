use serde::{Deserialize, Serialize};

/// Input shape: the fields a client supplies on create and replace.
/// The id is always assigned by the store, never by the client.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Output shape: the input fields plus the store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Query parameters for the list endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Response type for the root metadata endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootResponse {
    pub title: String,
    pub version: String,
    pub message: String,
    pub endpoints: EndpointDirectory,
}

/// Directory of the paths the service exposes
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EndpointDirectory {
    pub items: String,
    pub docs: String,
    pub openapi: String,
}
