//! Shared application state for all routes.

use std::sync::Arc;

use crate::config::DbConfig;

#[derive(Clone)]
pub struct AppState {
    /// Connection settings only. Each request opens its own connection, so
    /// there is no pool to hold here.
    pub db: Arc<DbConfig>,
}
