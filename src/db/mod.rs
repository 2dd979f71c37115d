// Database module - provides data access layer

use color_eyre::{eyre::OptionExt, Result};
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub use models::*;

mod category;
mod migrations;
mod question;
mod repository;

const MAX_CONNECTIONS: u32 = 5;

#[derive(Clone)]
pub struct Db {
    pool: sqlx::PgPool,
}

impl Db {
    pub async fn new(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(url)
            .await?;

        // Verify connection
        let one: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_optional(&pool)
            .await?
            .ok_or_eyre("connection check failed")?;
        assert_eq!(one, 1);

        migrations::run(&pool).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { pool })
    }

    pub async fn migration_applied(&self, version: &str) -> Result<bool> {
        let applied: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM schema_migrations WHERE version = $1)",
        )
        .bind(version)
        .fetch_one(&self.pool)
        .await?;

        Ok(applied)
    }
}
