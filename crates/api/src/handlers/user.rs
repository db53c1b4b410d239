//! Handler for the authenticated `/user` route.
//!
//! Reports the identity carried by the bearer token. It has no access to
//! the article store.

use axum::Json;
use newsdesk_core::types::DbId;
use serde::Serialize;

use crate::middleware::auth::AuthUser;

/// Identity of the caller, as asserted by their access token.
#[derive(Debug, Serialize)]
pub struct CurrentUser {
    pub id: DbId,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub success: bool,
    pub user: CurrentUser,
}

/// GET /api/user
pub async fn current(auth: AuthUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        success: true,
        user: CurrentUser {
            id: auth.user_id,
            role: auth.role,
        },
    })
}
