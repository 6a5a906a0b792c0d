use async_trait::async_trait;
use sqlx::PgPool;

use crate::blogs::repo_types::{Blog, BlogInput};
use crate::error::StoreError;

#[async_trait]
pub trait BlogRepo: Send + Sync {
    async fn create(&self, blog: &BlogInput) -> Result<Blog, StoreError>;
    async fn list(&self) -> Result<Vec<Blog>, StoreError>;
    async fn get(&self, id: i64) -> Result<Option<Blog>, StoreError>;
    /// Overwrites every field; `None` when no blog has this id.
    async fn update(&self, id: i64, blog: &BlogInput) -> Result<Option<Blog>, StoreError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct PgBlogRepo {
    db: PgPool,
}

impl PgBlogRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepo for PgBlogRepo {
    async fn create(&self, blog: &BlogInput) -> Result<Blog, StoreError> {
        let row = sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (title, content, author, image, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, content, author, image, created_at
            "#,
        )
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.author)
        .bind(&blog.image)
        .bind(&blog.created_at)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Blog>, StoreError> {
        let rows = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, content, author, image, created_at
            FROM blogs
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Blog>, StoreError> {
        let row = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, content, author, image, created_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, blog: &BlogInput) -> Result<Option<Blog>, StoreError> {
        let row = sqlx::query_as::<_, Blog>(
            r#"
            UPDATE blogs
               SET title = $2, content = $3, author = $4, image = $5, created_at = $6
             WHERE id = $1
            RETURNING id, title, content, author, image, created_at
            "#,
        )
        .bind(id)
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.author)
        .bind(&blog.image)
        .bind(&blog.created_at)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let res = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
