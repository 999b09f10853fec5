//! Fixed JSON bodies. Clients match these strings verbatim.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const WELCOME: &str = "Welcome to my Flask app!";
pub const ITEM_ADDED: &str = "Item added successfully";
pub const ITEM_UPDATED: &str = "Item updated successfully";
pub const ITEM_DELETED: &str = "Item deleted successfully";
pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const INVALID_INPUT: &str = "Invalid input, name and description are required";
pub const RESOURCE_NOT_FOUND: &str = "Resource not found";
pub const BAD_REQUEST: &str = "Bad request. Please check the input.";
pub const INTERNAL_ERROR: &str = "Internal server error. Please try again later.";

/// Single-message body used by every response except the item list.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

pub fn message(status: StatusCode, message: &'static str) -> (StatusCode, Json<MessageBody>) {
    (status, Json(MessageBody { message }))
}
