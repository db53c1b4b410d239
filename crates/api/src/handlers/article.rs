//! Handlers for the `/article` resource.
//!
//! Every `{id}` handler begins with [`resolve_article`], so an unknown or
//! malformed id answers 404 before the request body is looked at. Write
//! handlers validate into the allow-list inputs from `newsdesk_core` and
//! never hand the raw payload to the store.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use newsdesk_core::article::{
    validate_article_changes, validate_new_article, ArticleChanges, ENTITY_NAME,
};
use newsdesk_core::error::CoreError;
use newsdesk_core::types::DbId;
use newsdesk_db::models::article::Article;
use newsdesk_db::repositories::ArticleRepo;
use newsdesk_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::ArticleBody;
use crate::response::{ItemResponse, ListResponse};
use crate::state::AppState;

const ARTICLE_CREATED: &str = "Article created";
const ARTICLE_UPDATED: &str = "Article updated";
const ARTICLE_DELETED: &str = "Article deleted";

fn not_found(id: impl ToString) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_NAME,
        id: id.to_string(),
    })
}

/// Parse a raw path segment and load the article it names.
pub async fn resolve_article(pool: &DbPool, raw_id: &str) -> AppResult<Article> {
    let id: DbId = raw_id.parse().map_err(|_| not_found(raw_id))?;
    ArticleRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/article
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<Article>>> {
    let articles = ArticleRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new(articles)))
}

/// POST /api/article
pub async fn create(
    State(state): State<AppState>,
    payload: AppResult<ArticleBody>,
) -> AppResult<(StatusCode, Json<ItemResponse<Article>>)> {
    let ArticleBody(payload) = payload?;
    let input = validate_new_article(&payload)?;

    let article = ArticleRepo::create(&state.pool, &input).await?;
    tracing::info!(article_id = article.id, "Article created");

    Ok((
        StatusCode::CREATED,
        Json(ItemResponse::with_message(ARTICLE_CREATED, article)),
    ))
}

/// GET /api/article/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ItemResponse<Article>>> {
    let article = resolve_article(&state.pool, &id).await?;
    Ok(Json(ItemResponse::new(article)))
}

/// PUT /api/article/{id}
///
/// Full update: `title` and `content` are required; an absent `published`
/// keeps its stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: AppResult<ArticleBody>,
) -> AppResult<Json<ItemResponse<Article>>> {
    let existing = resolve_article(&state.pool, &id).await?;
    let ArticleBody(payload) = payload?;
    let changes = ArticleChanges::from(validate_new_article(&payload)?);

    apply_changes(&state.pool, existing.id, &changes).await
}

/// PATCH /api/article/{id}
///
/// Partial update: only fields present in the body are validated and written.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: AppResult<ArticleBody>,
) -> AppResult<Json<ItemResponse<Article>>> {
    let existing = resolve_article(&state.pool, &id).await?;
    let ArticleBody(payload) = payload?;
    let changes = validate_article_changes(&payload)?;

    apply_changes(&state.pool, existing.id, &changes).await
}

/// DELETE /api/article/{id}
///
/// Responds with the article as it was just before removal.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ItemResponse<Article>>> {
    let existing = resolve_article(&state.pool, &id).await?;

    // The row can vanish between lookup and delete under concurrent writers.
    let article = ArticleRepo::delete(&state.pool, existing.id)
        .await?
        .ok_or_else(|| not_found(existing.id))?;
    tracing::info!(article_id = article.id, "Article deleted");

    Ok(Json(ItemResponse::with_message(ARTICLE_DELETED, article)))
}

async fn apply_changes(
    pool: &DbPool,
    id: DbId,
    changes: &ArticleChanges,
) -> AppResult<Json<ItemResponse<Article>>> {
    let article = ArticleRepo::update(pool, id, changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(article_id = article.id, "Article updated");

    Ok(Json(ItemResponse::with_message(ARTICLE_UPDATED, article)))
}
