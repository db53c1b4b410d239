//! Article entity model.

use newsdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub use newsdesk_core::article::{ArticleChanges, NewArticle};

/// An article row from the `articles` table.
///
/// `published` is stored as `0`/`1` and always decoded as a boolean.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
