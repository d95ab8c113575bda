// src/database.rs
use sqlx::{postgres::PgPoolOptions, PgPool};

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id          BIGSERIAL PRIMARY KEY,
    name        VARCHAR(100) NOT NULL,
    description VARCHAR(250) NOT NULL,
    price       NUMERIC(14, 2) NOT NULL CHECK (price >= 0),
    available   BOOLEAN NOT NULL DEFAULT TRUE,
    category    VARCHAR(63) NOT NULL
)"#;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Creates the products table when it does not exist yet.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(pool).await?;
    tracing::info!("Database schema ready");
    Ok(())
}
