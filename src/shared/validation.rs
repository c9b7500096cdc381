//! Schema validation for request bodies.
//!
//! DTOs declare their rules with `validator` derive attributes. The helpers
//! here flatten `ValidationErrors` into messages ordered by the DTO's field
//! order, so the first missing field is reported first (for example
//! `"userId" is required`).

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::core::error::{AppError, Result};

/// Key used by `validator` for struct-level (schema function) errors
const SCHEMA_KEY: &str = "__all__";

/// A request body validated against a declarative schema.
pub trait RequestSchema: Validate {
    /// Field names in the order their errors are reported.
    ///
    /// Names are matched ignoring case and underscores, so `userId` and
    /// `user_id` refer to the same field.
    const FIELD_ORDER: &'static [&'static str];
}

/// Validate a payload, turning failures into [`AppError::Validation`]
pub fn validate_request<T: RequestSchema>(payload: &T) -> Result<()> {
    payload
        .validate()
        .map_err(|errors| into_app_error(&errors, T::FIELD_ORDER))
}

/// Build a validation error whose message is the first failing field in `order`
pub fn into_app_error(errors: &ValidationErrors, order: &[&str]) -> AppError {
    let messages = ordered_messages(errors, order);
    match messages.first() {
        Some(first) => AppError::Validation {
            message: first.clone(),
            errors: messages,
        },
        None => AppError::validation("Invalid request body"),
    }
}

/// Flatten errors (including nested structs and lists) into messages sorted by field order
pub fn ordered_messages(errors: &ValidationErrors, order: &[&str]) -> Vec<String> {
    let mut collected: Vec<(usize, String, String)> = Vec::new();

    for (field, kind) in errors.errors() {
        let field = field.to_string();
        let rank = rank_of(&field, order);
        for message in flatten(&field, kind) {
            collected.push((rank, field.clone(), message));
        }
    }

    // Stable sort keeps per-field messages in declaration order
    collected.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    collected.into_iter().map(|(_, _, message)| message).collect()
}

fn rank_of(field: &str, order: &[&str]) -> usize {
    if field == SCHEMA_KEY {
        return usize::MAX;
    }
    let wanted = normalize(field);
    order
        .iter()
        .position(|candidate| normalize(candidate) == wanted)
        .unwrap_or(order.len())
}

fn normalize(field: &str) -> String {
    field
        .chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn flatten(path: &str, kind: &ValidationErrorsKind) -> Vec<String> {
    match kind {
        ValidationErrorsKind::Field(errors) => errors
            .iter()
            .map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("\"{}\" is invalid", path),
            })
            .collect(),
        ValidationErrorsKind::Struct(inner) => inner
            .errors()
            .iter()
            .flat_map(|(field, kind)| flatten(&format!("{}.{}", path, field), kind))
            .collect(),
        ValidationErrorsKind::List(items) => items
            .iter()
            .flat_map(|(index, inner)| {
                inner
                    .errors()
                    .iter()
                    .flat_map(|(field, kind)| {
                        flatten(&format!("{}[{}].{}", path, index, field), kind)
                    })
                    .collect::<Vec<_>>()
            })
            .collect(),
    }
}
