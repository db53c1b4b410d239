//! Article input rules: request payload parsing and field validation.
//!
//! Requests are deserialized into [`ArticlePayload`], which keeps every field
//! as raw JSON so type mismatches can be reported per field instead of
//! failing the whole body. Validation then produces one of the allow-list
//! inputs, [`NewArticle`] or [`ArticleChanges`], which are the only types the
//! store accepts.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;
use crate::validation::FieldErrors;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors.
pub const ENTITY_NAME: &str = "Article";

/// Maximum allowed length for an article title, in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// `MAX_TITLE_LENGTH` as `u64`, the type `validator` length bounds require.
const MAX_TITLE_LENGTH_U64: u64 = MAX_TITLE_LENGTH as u64;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Raw article request body.
///
/// Each field distinguishes "absent" (`None`) from "present" (`Some`), and a
/// present JSON `null` is kept as `Some(Value::Null)`. Unknown keys are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlePayload {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub content: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub published: Option<Value>,
}

/// Validated input for inserting an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    /// `None` leaves the store default (`false`).
    pub published: Option<bool>,
}

/// Validated input for updating an article. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ArticleChanges {
    #[validate(length(
        max = MAX_TITLE_LENGTH_U64,
        message = "The title field must not be greater than 255 characters."
    ))]
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

impl From<NewArticle> for ArticleChanges {
    fn from(input: NewArticle) -> Self {
        Self {
            title: Some(input.title),
            content: Some(input.content),
            published: input.published,
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Whether an absent field is an error or simply left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Sometimes,
}

/// Validate a create or full-update body: `title` and `content` required,
/// `published` optional.
pub fn validate_new_article(payload: &ArticlePayload) -> Result<NewArticle, CoreError> {
    match check(payload, Presence::Required)? {
        ArticleChanges {
            title: Some(title),
            content: Some(content),
            published,
        } => Ok(NewArticle {
            title,
            content,
            published,
        }),
        // Required mode records an error for every missing field.
        _ => Err(CoreError::Validation(FieldErrors::new())),
    }
}

/// Validate a partial-update body: every field optional, but any field that
/// is present must satisfy the same rules as on create.
pub fn validate_article_changes(payload: &ArticlePayload) -> Result<ArticleChanges, CoreError> {
    check(payload, Presence::Sometimes)
}

fn check(payload: &ArticlePayload, presence: Presence) -> Result<ArticleChanges, CoreError> {
    let mut errors = FieldErrors::new();

    let changes = ArticleChanges {
        title: parse_title(payload.title.as_ref(), presence, &mut errors),
        content: parse_content(payload.content.as_ref(), presence, &mut errors),
        published: parse_published(payload.published.as_ref(), &mut errors),
    };

    if let Err(rule_errors) = changes.validate() {
        errors.merge(rule_errors.into());
    }

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(CoreError::Validation(errors))
    }
}

fn required_message(field: &str) -> String {
    format!("The {field} field is required.")
}

fn string_message(field: &str) -> String {
    format!("The {field} field must be a string.")
}

/// Shared "required" handling: absent is only an error in required mode, a
/// present `null` is always one.
fn require<'a>(
    field: &str,
    value: Option<&'a Value>,
    presence: Presence,
    errors: &mut FieldErrors,
) -> Option<&'a Value> {
    match value {
        None if presence == Presence::Sometimes => None,
        None | Some(Value::Null) => {
            errors.add(field, required_message(field));
            None
        }
        Some(value) => Some(value),
    }
}

/// Trim `raw`, treating an empty result as missing.
fn non_blank(field: &str, raw: &str, errors: &mut FieldErrors) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, required_message(field));
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_title(
    value: Option<&Value>,
    presence: Presence,
    errors: &mut FieldErrors,
) -> Option<String> {
    match require("title", value, presence, errors)? {
        Value::String(raw) => non_blank("title", raw, errors),
        _ => {
            errors.add("title", string_message("title"));
            None
        }
    }
}

/// `content` takes any non-empty scalar; numbers are stored as text and
/// booleans as `"1"`/`"0"`.
fn parse_content(
    value: Option<&Value>,
    presence: Presence,
    errors: &mut FieldErrors,
) -> Option<String> {
    match require("content", value, presence, errors)? {
        Value::String(raw) => non_blank("content", raw, errors),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(if *flag { "1" } else { "0" }.to_string()),
        _ => {
            errors.add("content", string_message("content"));
            None
        }
    }
}

/// Accepts `true`, `false`, `1`, `0`, `"1"` and `"0"`.
fn parse_published(value: Option<&Value>, errors: &mut FieldErrors) -> Option<bool> {
    let value = value?;
    let parsed = match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(raw) => match raw.as_str() {
            "0" => Some(false),
            "1" => Some(true),
            _ => None,
        },
        _ => None,
    };
    if parsed.is_none() {
        errors.add("published", "The published field must be true or false.");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn payload(body: Value) -> ArticlePayload {
        serde_json::from_value(body).expect("test body must be a JSON object")
    }

    fn field_errors(result: Result<impl std::fmt::Debug, CoreError>) -> FieldErrors {
        match result {
            Err(CoreError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn payload_distinguishes_absent_from_null() {
        let parsed = payload(json!({ "title": null }));
        assert_eq!(parsed.title, Some(Value::Null));
        assert_eq!(parsed.content, None);
    }

    #[test]
    fn valid_body_produces_trimmed_new_article() {
        let input = validate_new_article(&payload(json!({
            "title": "  Hello  ",
            "content": "Body",
        })))
        .unwrap();

        assert_eq!(
            input,
            NewArticle {
                title: "Hello".into(),
                content: "Body".into(),
                published: None,
            }
        );
    }

    #[test]
    fn missing_title_and_content_are_both_reported() {
        let errors = field_errors(validate_new_article(&payload(json!({}))));

        assert_eq!(errors.get("title"), ["The title field is required."]);
        assert_eq!(errors.get("content"), ["The content field is required."]);
        assert_eq!(errors.first_message(), Some("The title field is required."));
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let errors = field_errors(validate_new_article(&payload(json!({
            "title": "   ",
            "content": "",
        }))));

        assert_eq!(errors.get("title"), ["The title field is required."]);
        assert_eq!(errors.get("content"), ["The content field is required."]);
    }

    #[test]
    fn title_must_be_a_string() {
        let errors = field_errors(validate_new_article(&payload(json!({
            "title": 42,
            "content": "Body",
        }))));

        assert_eq!(errors.get("title"), ["The title field must be a string."]);
        assert!(!errors.contains("content"));
    }

    #[test]
    fn title_longer_than_limit_is_rejected() {
        let errors = field_errors(validate_new_article(&payload(json!({
            "title": "a".repeat(256),
            "content": "Body",
        }))));

        assert_eq!(
            errors.get("title"),
            ["The title field must not be greater than 255 characters."]
        );
    }

    #[test]
    fn title_limit_counts_characters_not_bytes() {
        let title = "é".repeat(MAX_TITLE_LENGTH);
        let input = validate_new_article(&payload(json!({
            "title": title,
            "content": "Body",
        })))
        .unwrap();

        assert_eq!(input.title.chars().count(), MAX_TITLE_LENGTH);
    }

    #[test]
    fn length_and_required_errors_are_reported_together() {
        let errors = field_errors(validate_new_article(&payload(json!({
            "title": "a".repeat(300),
        }))));

        assert!(errors.contains("title"));
        assert!(errors.contains("content"));
    }

    #[test]
    fn numeric_content_is_stored_as_text() {
        let input = validate_new_article(&payload(json!({
            "title": "Numbers",
            "content": 12.5,
        })))
        .unwrap();

        assert_eq!(input.content, "12.5");
    }

    #[test]
    fn boolean_content_is_stored_as_digit() {
        for (raw, expected) in [(json!(true), "1"), (json!(false), "0")] {
            let input = validate_new_article(&payload(json!({
                "title": "Flags",
                "content": raw,
            })))
            .unwrap();
            assert_eq!(input.content, expected);
        }
    }

    #[test]
    fn structured_content_is_rejected() {
        for raw in [json!(["a", "b"]), json!({ "body": "x" })] {
            let errors = field_errors(validate_new_article(&payload(json!({
                "title": "T",
                "content": raw,
            }))));
            assert_eq!(errors.get("content"), ["The content field must be a string."]);
        }
    }

    #[test]
    fn published_accepts_boolean_like_values() {
        for (raw, expected) in [
            (json!(true), true),
            (json!(false), false),
            (json!(1), true),
            (json!(0), false),
            (json!("1"), true),
            (json!("0"), false),
        ] {
            let input = validate_new_article(&payload(json!({
                "title": "T",
                "content": "C",
                "published": raw,
            })))
            .unwrap();
            assert_eq!(input.published, Some(expected));
        }
    }

    #[test]
    fn published_rejects_other_values() {
        for raw in [json!("yes"), json!(2), json!(null), json!("true"), json!([])] {
            let errors = field_errors(validate_new_article(&payload(json!({
                "title": "T",
                "content": "C",
                "published": raw,
            }))));
            assert_eq!(
                errors.get("published"),
                ["The published field must be true or false."]
            );
        }
    }

    #[test]
    fn partial_changes_allow_absent_fields() {
        let changes = validate_article_changes(&payload(json!({ "content": "New" }))).unwrap();

        assert_eq!(
            changes,
            ArticleChanges {
                title: None,
                content: Some("New".into()),
                published: None,
            }
        );
    }

    #[test]
    fn partial_changes_still_reject_null_and_blank() {
        let errors = field_errors(validate_article_changes(&payload(json!({
            "title": null,
            "content": " ",
        }))));

        assert_eq!(errors.get("title"), ["The title field is required."]);
        assert_eq!(errors.get("content"), ["The content field is required."]);
    }

    #[test]
    fn new_article_converts_into_full_changes() {
        let changes: ArticleChanges = NewArticle {
            title: "T".into(),
            content: "C".into(),
            published: None,
        }
        .into();

        assert_matches!(
            changes,
            ArticleChanges {
                title: Some(_),
                content: Some(_),
                published: None
            }
        );
    }
}
