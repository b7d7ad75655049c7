//! Item CRUD handlers.
//!
//! These handlers use the repository trait object for storage access and
//! translate absent results into 404 responses. Payload validation happens
//! while the request body is deserialized, before the repository is called.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use catalog_core::item::{
    CreateItemRequest, Item, ItemListResponse, ReplaceItemRequest, UpdateItemRequest,
};

use crate::{
    handlers::{ApiError, JsonBody},
    state::AppState,
};

/// List all items (GET /items).
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<ItemListResponse>, ApiError> {
    let items = state.items.list_items().await?;
    // Counted from the same snapshot so `total` always matches `items`.
    let total = items.len();

    Ok(Json(ItemListResponse::new(items, total)))
}

/// Get a single item by ID (GET /items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = path?;

    state
        .items
        .get_item(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Create a new item (POST /items).
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateItemRequest>,
) -> Result<Json<Item>, ApiError> {
    tracing::debug!(payload = ?payload, "Received create item request");

    let item = state.items.create_item(payload).await?;

    tracing::info!(item_id = %item.id, name = %item.name, "Created new item");

    Ok(Json(item))
}

/// Replace an item by ID (PUT /items/{id}).
pub async fn replace_item(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    JsonBody(payload): JsonBody<ReplaceItemRequest>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = path?;

    let item = state
        .items
        .replace_item(id, payload)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(item_id = %id, "Replaced item");

    Ok(Json(item))
}

/// Partially update an item by ID (PATCH /items/{id}).
///
/// Returns the item as it is after the update.
pub async fn update_item(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    JsonBody(payload): JsonBody<UpdateItemRequest>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = path?;
    let changes_fields = !payload.is_empty();

    let item = state
        .items
        .update_item(id, payload)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(item_id = %id, changes_fields, "Updated item");

    Ok(Json(item))
}

/// Delete an item by ID (DELETE /items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;

    if !state.items.delete_item(id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(item_id = %id, "Deleted item");

    Ok(StatusCode::NO_CONTENT)
}
