//! Root welcome route.

use axum::Json;

use crate::response::{self, MessageBody};

/// Static greeting; never touches the database.
pub async fn home() -> Json<MessageBody> {
    Json(MessageBody {
        message: response::WELCOME,
    })
}
