//! Shared response envelope types for API handlers.
//!
//! Every article endpoint answers with `{ "success": true, ... }`. Use these
//! structs instead of ad-hoc `serde_json::json!` bodies so the envelope
//! shape is checked at compile time.

use serde::Serialize;

/// `{ "success": true, "articles": [...] }` for collection reads.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub articles: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(articles: Vec<T>) -> Self {
        Self {
            success: true,
            articles,
        }
    }
}

/// `{ "success": true, "message"?: "...", "article": {...} }` for
/// single-record reads and writes.
#[derive(Debug, Serialize)]
pub struct ItemResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub article: T,
}

impl<T: Serialize> ItemResponse<T> {
    /// Plain read, no message.
    pub fn new(article: T) -> Self {
        Self {
            success: true,
            message: None,
            article,
        }
    }

    /// Write confirmation carrying a human-readable message.
    pub fn with_message(message: &'static str, article: T) -> Self {
        Self {
            success: true,
            message: Some(message),
            article,
        }
    }
}
