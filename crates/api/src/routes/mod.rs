pub mod article;
pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /article                 list, create
/// /article/{id}            show, update (PUT), partial update (PATCH), delete
///
/// /user                    current identity (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/article", article::router())
        .merge(user::router())
}
