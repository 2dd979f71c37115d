use color_eyre::Result;

use super::models::CategoryModel;
use super::Db;

impl Db {
    pub async fn list_categories(&self) -> Result<Vec<CategoryModel>> {
        let categories =
            sqlx::query_as::<_, CategoryModel>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    pub async fn category_exists(&self, category_id: i32) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(category_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    pub async fn insert_category(&self, kind: &str) -> Result<i32> {
        let id: i32 = sqlx::query_scalar("INSERT INTO categories (type) VALUES ($1) RETURNING id")
            .bind(kind)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!("new category created with id: {id}");
        Ok(id)
    }
}
