use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// `GET /user` -> current authenticated identity.
pub fn router() -> Router<AppState> {
    Router::new().route("/user", get(user::current))
}
