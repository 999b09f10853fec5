//! Item statements against PostgreSQL, one connection per operation.

use sqlx::{ConnectOptions, PgConnection};

use crate::config::DbConfig;
use crate::error::ApiError;
use crate::models::{Item, ItemInput};

pub struct ItemService;

impl ItemService {
    /// Full-table read, ordered by id.
    pub async fn list(db: &DbConfig) -> Result<Vec<Item>, ApiError> {
        let mut conn = open_connection(db).await?;
        tracing::debug!("listing items");
        let items =
            sqlx::query_as::<_, Item>("SELECT id, name, description FROM items ORDER BY id")
                .fetch_all(&mut conn)
                .await?;
        Ok(items)
    }

    /// Insert one row; the database assigns the id.
    pub async fn create(db: &DbConfig, input: &ItemInput) -> Result<(), ApiError> {
        let mut conn = open_connection(db).await?;
        tracing::debug!(name = %input.name, "inserting item");
        sqlx::query("INSERT INTO items (name, description) VALUES ($1, $2)")
            .bind(&input.name)
            .bind(&input.description)
            .execute(&mut conn)
            .await?;
        Ok(())
    }

    /// Overwrite name and description of the row with `id`. Returns false when
    /// no such row existed at check time; the check and the write run as two
    /// plain statements on the same connection, without isolation.
    pub async fn update(db: &DbConfig, id: i32, input: &ItemInput) -> Result<bool, ApiError> {
        let mut conn = open_connection(db).await?;
        if !exists(&mut conn, id).await? {
            return Ok(false);
        }
        tracing::debug!(id, "updating item");
        sqlx::query("UPDATE items SET name = $1, description = $2 WHERE id = $3")
            .bind(&input.name)
            .bind(&input.description)
            .bind(id)
            .execute(&mut conn)
            .await?;
        Ok(true)
    }

    /// Remove the row with `id`. Same check-then-write shape as `update`.
    pub async fn delete(db: &DbConfig, id: i32) -> Result<bool, ApiError> {
        let mut conn = open_connection(db).await?;
        if !exists(&mut conn, id).await? {
            return Ok(false);
        }
        tracing::debug!(id, "deleting item");
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&mut conn)
            .await?;
        Ok(true)
    }
}

/// One fresh connection per operation, released by drop on every exit path.
async fn open_connection(db: &DbConfig) -> Result<PgConnection, sqlx::Error> {
    tracing::debug!(
        host = %db.host(),
        port = db.port(),
        database = db.database(),
        "connecting to PostgreSQL"
    );
    db.connect_options().connect().await
}

async fn exists(conn: &mut PgConnection, id: i32) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT id FROM items WHERE id = $1")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}
