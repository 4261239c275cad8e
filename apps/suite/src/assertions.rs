//! Assertion helpers over decoded response bodies
//!
//! Every helper is a pure predicate returning [`AssertionResult`]. A failure
//! names the offending field or key together with the values involved.

use serde_json::Value;
use thiserror::Error;

/// Fields every post carries in its nominal shape
pub const REQUIRED_FIELDS: [&str; 4] = ["userId", "id", "title", "body"];

/// Client-supplied fields echoed back by the service
pub const INPUT_FIELDS: [&str; 3] = ["userId", "title", "body"];

/// Assertion failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssertionError {
    /// A required post field is absent
    #[error("missing '{0}' in post")]
    MissingField(String),

    /// A post field has the wrong JSON type
    #[error("'{field}' must be {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: Value,
    },

    /// A response value differs from the one sent
    #[error("{key} mismatch: expected {expected}, got {}", describe(.actual))]
    ValueMismatch {
        key: String,
        expected: Value,
        actual: Option<Value>,
    },

    /// A key sent in the request is absent from the response
    #[error("missing key '{0}' in response")]
    MissingKey(String),

    /// The status code is not the expected one
    #[error("expected status {expected}, got {actual}")]
    UnexpectedStatusCode { expected: u16, actual: u16 },

    /// The body does not have the expected overall shape
    #[error("expected {expected}, got {actual}")]
    UnexpectedBody {
        expected: &'static str,
        actual: Value,
    },
}

/// Result type for assertion helpers
pub type AssertionResult = Result<(), AssertionError>;

fn describe(value: &Option<Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "nothing".to_string(),
    }
}

/// Fails if any of `userId`, `id`, `title`, `body` is absent
pub fn assert_required_fields_present(post: &Value) -> AssertionResult {
    for field in REQUIRED_FIELDS {
        if post.get(field).is_none() {
            return Err(AssertionError::MissingField(field.to_string()));
        }
    }
    Ok(())
}

/// Fails if `userId`/`id` are not integers or `title`/`body` are not strings
pub fn assert_field_types(post: &Value) -> AssertionResult {
    check_type(post, "userId", "an integer", is_integer)?;
    check_type(post, "id", "an integer", is_integer)?;
    check_type(post, "title", "a string", Value::is_string)?;
    check_type(post, "body", "a string", Value::is_string)
}

fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

fn check_type(
    post: &Value,
    field: &str,
    expected: &'static str,
    predicate: fn(&Value) -> bool,
) -> AssertionResult {
    let value = post
        .get(field)
        .ok_or_else(|| AssertionError::MissingField(field.to_string()))?;

    if predicate(value) {
        Ok(())
    } else {
        Err(AssertionError::TypeMismatch {
            field: field.to_string(),
            expected,
            actual: value.clone(),
        })
    }
}

/// Fails if the echoed `userId`, `title` or `body` differs from the input,
/// or if the response carries no `id`
///
/// Only those three keys are compared; any other key in `input` is ignored.
pub fn assert_matches_input(input: &Value, response: &Value) -> AssertionResult {
    for key in INPUT_FIELDS {
        let Some(expected) = input.get(key) else {
            continue;
        };
        let actual = response.get(key);
        if actual != Some(expected) {
            return Err(AssertionError::ValueMismatch {
                key: key.to_string(),
                expected: expected.clone(),
                actual: actual.cloned(),
            });
        }
    }
    assert_has_id(response)
}

/// Fails unless every key of `input` is present in `response` with an equal value
///
/// Keys only present in `response` are not checked.
pub fn assert_subset_matches(input: &Value, response: &Value) -> AssertionResult {
    let Some(input) = input.as_object() else {
        return Ok(());
    };

    for (key, expected) in input {
        let actual = response
            .get(key)
            .ok_or_else(|| AssertionError::MissingKey(key.clone()))?;
        if actual != expected {
            return Err(AssertionError::ValueMismatch {
                key: key.clone(),
                expected: expected.clone(),
                actual: Some(actual.clone()),
            });
        }
    }
    Ok(())
}

/// Fails unless the status code is `expected`
pub fn assert_status(actual: u16, expected: u16) -> AssertionResult {
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionError::UnexpectedStatusCode { expected, actual })
    }
}

/// Fails unless the body is exactly `{}`
pub fn assert_empty_object(body: &Value) -> AssertionResult {
    match body.as_object() {
        Some(map) if map.is_empty() => Ok(()),
        _ => Err(AssertionError::UnexpectedBody {
            expected: "an empty object",
            actual: body.clone(),
        }),
    }
}

/// Fails if the response carries no `id`
pub fn assert_has_id(post: &Value) -> AssertionResult {
    if post.get("id").is_some() {
        Ok(())
    } else {
        Err(AssertionError::MissingField("id".to_string()))
    }
}

/// Fails unless `post.id` equals `id`
pub fn assert_id_equals(post: &Value, id: i64) -> AssertionResult {
    let actual = post
        .get("id")
        .ok_or_else(|| AssertionError::MissingField("id".to_string()))?;
    if actual.as_i64() == Some(id) {
        Ok(())
    } else {
        Err(AssertionError::ValueMismatch {
            key: "id".to_string(),
            expected: Value::from(id),
            actual: Some(actual.clone()),
        })
    }
}

/// Fails unless the body is a non-empty array of well-formed posts
pub fn assert_post_list(body: &Value) -> AssertionResult {
    let posts = match body.as_array() {
        Some(posts) if !posts.is_empty() => posts,
        _ => {
            return Err(AssertionError::UnexpectedBody {
                expected: "a non-empty list of posts",
                actual: body.clone(),
            })
        }
    };

    for post in posts {
        assert_required_fields_present(post)?;
        assert_field_types(post)?;
    }
    Ok(())
}
