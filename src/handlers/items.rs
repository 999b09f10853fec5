//! Item CRUD handlers: list, create, update, delete.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::ApiError;
use crate::models::ItemInput;
use crate::response;
use crate::service::ItemService;
use crate::state::AppState;

/// An unparseable id behaves like a URL that matches no route.
fn parse_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::RouteNotFound)?;
    Ok(id)
}

/// Shape violations (non-object body; missing, null, or non-string fields)
/// are the fixed invalid-input error; anything rejected before
/// deserialization (syntax, content type) is the generic bad request.
///
/// The body is taken as a raw `Value` first: a derived struct `Deserialize`
/// would also accept a positional array, and the contract requires a JSON
/// object.
fn require_input(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<ItemInput, ApiError> {
    let Json(value) = payload.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(_) => ApiError::InvalidInput,
        _ => ApiError::BadRequest,
    })?;
    if !value.is_object() {
        return Err(ApiError::InvalidInput);
    }
    serde_json::from_value(value).map_err(|_| ApiError::InvalidInput)
}

pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let items = ItemService::list(&state.db).await?;
    Ok(Json(items))
}

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let input = require_input(payload)?;
    ItemService::create(&state.db, &input).await?;
    Ok(response::message(StatusCode::CREATED, response::ITEM_ADDED))
}

pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(id)?;
    let input = require_input(payload)?;
    if !ItemService::update(&state.db, id, &input).await? {
        return Err(ApiError::NotFound);
    }
    Ok(response::message(StatusCode::OK, response::ITEM_UPDATED))
}

pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(id)?;
    if !ItemService::delete(&state.db, id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(response::message(StatusCode::OK, response::ITEM_DELETED))
}
