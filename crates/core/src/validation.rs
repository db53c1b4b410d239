//! Per-field validation error collection.
//!
//! Validation never stops at the first failing field: every rule runs and
//! each message is recorded under the field it belongs to, in the order the
//! rules were evaluated.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use validator::ValidationErrors;

/// Ordered map of field name to the messages raised against it.
///
/// Serializes as a plain JSON object, e.g.
/// `{ "title": ["The title field is required."] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any message has been recorded for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages recorded for `field`, empty if none.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// The first message recorded, used as the summary line of a 422 response.
    pub fn first_message(&self) -> Option<&str> {
        self.0
            .values()
            .flat_map(|messages| messages.iter())
            .map(String::as_str)
            .next()
    }

    /// Append the messages of `other`, skipping fields that already failed.
    ///
    /// A field reports its earliest failure only, so a value that was never
    /// parsed is not also flagged by rules that run on the parsed form.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            if !self.contains(&field) {
                self.0.insert(field, messages);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.first_message().unwrap_or("invalid input"))
    }
}

/// Flatten `validator` derive output into [`FieldErrors`].
///
/// Rules declared without a `message` fall back to a generic sentence built
/// from the rule code.
impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let field = field.to_string();
            for err in errs.iter() {
                let message = match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("The {field} field failed the {} rule.", err.code),
                };
                out.add(field.clone(), message);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_follows_insertion_order() {
        let mut errors = FieldErrors::new();
        errors.add("title", "title is bad");
        errors.add("content", "content is bad");
        errors.add("title", "title is worse");

        assert_eq!(errors.first_message(), Some("title is bad"));
        assert_eq!(errors.get("title").len(), 2);
        assert!(errors.get("published").is_empty());
    }

    #[test]
    fn merge_keeps_existing_field_messages() {
        let mut errors = FieldErrors::new();
        errors.add("title", "The title field must be a string.");

        let mut later = FieldErrors::new();
        later.add("title", "too long");
        later.add("content", "The content field is required.");
        errors.merge(later);

        assert_eq!(errors.get("title"), ["The title field must be a string."]);
        assert_eq!(errors.get("content"), ["The content field is required."]);
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut errors = FieldErrors::new();
        errors.add("published", "The published field must be true or false.");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "published": ["The published field must be true or false."] })
        );
    }

    #[test]
    fn empty_errors_display_fallback() {
        assert_eq!(FieldErrors::new().to_string(), "invalid input");
    }
}
