//! Item service: a small items CRUD REST API backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::DbConfig;
pub use error::{ApiError, ConfigError};
pub use models::{Item, ItemInput};
pub use routes::app;
pub use service::ItemService;
pub use state::AppState;
