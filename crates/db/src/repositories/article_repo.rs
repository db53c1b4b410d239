//! Repository for the `articles` table.

use chrono::Utc;
use newsdesk_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::article::{Article, ArticleChanges, NewArticle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, published, created_at, updated_at";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row.
    ///
    /// If `published` is `None` in the input, defaults to `false`.
    pub async fn create(pool: &SqlitePool, input: &NewArticle) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, content, published, created_at, updated_at)
             VALUES (?1, ?2, COALESCE(?3, 0), ?4, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.published)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find an article by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = ?1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all articles in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles ORDER BY id ASC");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Update an article. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed regardless.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &ArticleChanges,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = COALESCE(?2, title),
                content = COALESCE(?3, content),
                published = COALESCE(?4, published),
                updated_at = ?5
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.published)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an article, returning the row as it was just
    /// before removal. Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("DELETE FROM articles WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all stored articles.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(pool)
            .await
    }
}
